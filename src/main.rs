fn main() {
    kicks::app::cli::run();
}
