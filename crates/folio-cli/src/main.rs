use clap::Parser;
use folio_cli::{CliArgs, FolioCli};

fn main() {
    let args = CliArgs::parse();

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("error: failed to start runtime: {e}");
            std::process::exit(1);
        }
    };

    let result = runtime.block_on(async {
        let cli = FolioCli::from_args("folio", &args)?;
        cli.run(args).await
    });

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
