use solscope::cli;

fn main() {
    cli::run();
}
