use ddlgen::{
    cli::{Cli, ExitOnErr},
    utils,
};

fn main() {
    let cli = Cli::parse_args();
    let settings = cli.load_settings().exit_on_err("Failed to load configuration");

    utils::logger::init_logging(&settings.logs);

    cli.execute();
}
