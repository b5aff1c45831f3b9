use anyhow::{Context, Result};
use hackasm::assemble_with_debug;
use log::info;
use std::io::Read;
use std::path::Path;
use std::{
    env,
    fs::{self, File},
};

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let filename: String = env::args()
        .nth(1)
        .ok_or_else(|| anyhow::Error::msg("Need an input filename"))?;
    let output_name: String = env::args().nth(2).unwrap_or_else(|| {
        Path::new(&filename)
            .with_extension("")
            .to_string_lossy()
            .into_owned()
    });
    let mut file = File::open(&filename).with_context(|| format!("opening {}", filename))?;
    let mut program_text = String::new();
    file.read_to_string(&mut program_text)?;

    let name = Path::new(&output_name)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let (program, debug) = assemble_with_debug(&program_text, &name)?;

    fs::write(format!("{}.hack", output_name), program)?;
    info!("wrote {}.hack", output_name);

    if env::var_os("HACKASM_DEBUG").is_some() {
        fs::write(format!("{}.hdb", output_name), debug)?;
        info!("wrote {}.hdb", output_name);
    }

    Ok(())
}
