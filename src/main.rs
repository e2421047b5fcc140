fn main() -> Result<(), Box<dyn std::error::Error>> {
    songbook::runtime::run()
}
