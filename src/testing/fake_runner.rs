use std::collections::VecDeque;
use std::sync::Mutex;

use crate::domain::{AppError, CommandOutput, Invocation};
use crate::ports::CommandRunner;

type RunEffect = Box<dyn Fn(&Invocation) + Send>;

/// Records invocations and answers from a script keyed by command-line prefix.
///
/// Unscripted captures succeed with empty output; unscripted streams succeed.
#[derive(Default)]
pub struct FakeRunner {
    calls: Mutex<Vec<Invocation>>,
    captures: Mutex<Vec<(String, VecDeque<CommandOutput>)>>,
    stream_failures: Mutex<Vec<String>>,
    effects: Mutex<Vec<(String, RunEffect)>>,
}

impl FakeRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue outputs for captures starting with `prefix`. The last one repeats.
    pub fn respond(self, prefix: &str, outputs: Vec<CommandOutput>) -> Self {
        self.captures.lock().unwrap().push((prefix.to_string(), outputs.into()));
        self
    }

    pub fn fail_stream(self, prefix: &str) -> Self {
        self.stream_failures.lock().unwrap().push(prefix.to_string());
        self
    }

    /// Run `effect` whenever an invocation starts with `prefix`, before answering.
    pub fn on_run(self, prefix: &str, effect: impl Fn(&Invocation) + Send + 'static) -> Self {
        self.effects.lock().unwrap().push((prefix.to_string(), Box::new(effect)));
        self
    }

    fn record(&self, invocation: &Invocation) -> String {
        self.calls.lock().unwrap().push(invocation.clone());
        let line = invocation.to_string();
        for (prefix, effect) in self.effects.lock().unwrap().iter() {
            if line.starts_with(prefix.as_str()) {
                effect(invocation);
            }
        }
        line
    }

    pub fn calls(&self) -> Vec<Invocation> {
        self.calls.lock().unwrap().clone()
    }

    /// Command lines of every recorded invocation, in order.
    pub fn command_lines(&self) -> Vec<String> {
        self.calls().iter().map(ToString::to_string).collect()
    }
}

impl CommandRunner for FakeRunner {
    fn capture(&self, invocation: &Invocation) -> Result<CommandOutput, AppError> {
        let line = self.record(invocation);

        let mut captures = self.captures.lock().unwrap();
        let scripted =
            captures.iter_mut().rev().find(|(prefix, _)| line.starts_with(prefix.as_str()));
        let output = match scripted {
            Some((_, queue)) if queue.len() > 1 => queue.pop_front().unwrap_or_default(),
            Some((_, queue)) => queue.front().cloned().unwrap_or_default(),
            None => CommandOutput::ok(""),
        };
        Ok(output)
    }

    fn stream(&self, invocation: &Invocation) -> Result<bool, AppError> {
        let line = self.record(invocation);
        let failures = self.stream_failures.lock().unwrap();
        let failed = failures.iter().any(|prefix| line.starts_with(prefix.as_str()));
        Ok(!failed)
    }
}
