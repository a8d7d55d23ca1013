fn main() {
    salon_frontend::run();
}
