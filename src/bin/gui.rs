fn main() {
    multibrot_explorer::run_gui();
}
