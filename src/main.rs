fn main() {
    cfobs::app::cli::run();
}
