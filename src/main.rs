fn main() {
    plumber::app::cli::run();
}
