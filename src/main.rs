fn main() {
    std::process::exit(sourcescan::app::startup::startup());
}
