use route_ga::solver::genetic::search;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    search::run()
}
