fn main() {
    board_rules::protocol::run_loop();
}
