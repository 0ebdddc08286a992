fn main() {
    easybj::cli::run();
}
