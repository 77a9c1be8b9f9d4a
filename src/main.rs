use vitalab::logging;

fn main() -> anyhow::Result<()> {
    logging::init_tracing();
    vitalab::ui::run()?;
    Ok(())
}
