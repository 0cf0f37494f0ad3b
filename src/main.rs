fn main() {
    quickrent_web::start();
}
