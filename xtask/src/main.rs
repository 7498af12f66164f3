use xshell::{cmd, Shell};

use crate::flags::XtaskCmd;

mod flags;

fn main() -> anyhow::Result<()> {
    let flags = flags::Xtask::from_env()?;
    let sh = Shell::new()?;
    match flags.subcommand {
        XtaskCmd::Fix(_) => {
            cmd!(sh, "cargo fmt --all").run()?;
            cmd!(sh, "cargo fix --allow-dirty --allow-staged -q").run()?;
            cmd!(sh, "cargo clippy --fix --allow-dirty --allow-staged").run()?;
        }
        XtaskCmd::Test(_) => {
            cmd!(sh, "cargo test --workspace --all-features").run()?;
        }
        XtaskCmd::Bench(bench) => {
            let filter = bench.filter.into_iter();
            cmd!(sh, "cargo bench -p dynarray -- {filter...}").run()?;
        }
    }

    Ok(())
}
