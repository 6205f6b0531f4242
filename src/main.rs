fn main() -> Result<(), Box<dyn std::error::Error>> {
    lanepack::cli::run()
}
