mod command;
mod loader;
mod report;

fn main() -> anyhow::Result<()> {
    command::run()
}
