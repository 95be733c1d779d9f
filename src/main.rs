fn main() {
    anamalia::app::cli::run();
}
