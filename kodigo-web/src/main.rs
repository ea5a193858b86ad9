fn main() {
    dioxus::launch(kodigo_web::App);
}
