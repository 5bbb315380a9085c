use anyhow::Context;
use cat_logistics::{Config, Interpreter};
use std::fs::File;
use std::io::BufReader;

fn main() -> anyhow::Result<()> {
    let config: Config = argh::from_env();
    config.init_logging();

    let mut interpreter = Interpreter::default();
    match &config.script {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("can't open script {}", path.display()))?;
            interpreter.run_script(BufReader::new(file), &mut std::io::stdout())
        }
        None => interpreter.repl(!config.no_menu),
    }
}
