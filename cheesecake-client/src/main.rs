fn main() {
    cheesecake_client::launch();
}
