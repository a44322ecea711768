fn main() -> Result<(), Box<dyn std::error::Error>> {
    let presenter = multibrot_explorer::PpmFilePresenter::new();
    let mut controller = multibrot_explorer::SnapshotController::new(presenter);

    controller.generate()?;
    controller.write("output/multibrot.ppm")?;

    Ok(())
}
