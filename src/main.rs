use clap::Parser;
use latticeplot::cli::FilteredArgs;
use latticeplot::data::model::DensityField;

fn main() -> anyhow::Result<()> {
    env_logger::init();
    FilteredArgs::parse().run(DensityField::Density)
}
