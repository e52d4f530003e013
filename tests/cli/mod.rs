mod pipeline_contract;
