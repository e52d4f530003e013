fn main() {
    dxpack::app::cli::run();
}
