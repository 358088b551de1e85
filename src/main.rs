fn main() {
    iawd_pulse::run_app();
}
