fn main() {
    monkey_ast::cli::run();
}
