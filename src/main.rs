fn main() {
    gist_sweep::app::cli::run();
}
