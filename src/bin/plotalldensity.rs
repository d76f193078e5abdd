use clap::Parser;
use latticeplot::cli::AllArgs;
use latticeplot::data::model::DensityField;

fn main() -> anyhow::Result<()> {
    env_logger::init();
    AllArgs::parse().run(DensityField::Density)
}
