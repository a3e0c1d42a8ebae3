fn main() -> anyhow::Result<()> {
    coffee_pos::run()
}
