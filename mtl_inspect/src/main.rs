//! Print the materials declared in a Wavefront `.mtl` file

use anyhow::{Context, Result};
use clap::{Arg, ArgAction, Command};
use std::path::PathBuf;

use mtl_import::foundation::logging;
use mtl_import::prelude::*;

fn main() -> Result<()> {
    logging::init();

    let matches = Command::new("mtl_inspect")
        .about("Parses a Wavefront material library and prints its materials")
        .arg(
            Arg::new("library")
                .value_name("FILE")
                .help("Material library to inspect")
                .required(true),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("Import configuration (.toml or .ron)"),
        )
        .arg(
            Arg::new("summary")
                .short('s')
                .long("summary")
                .help("Only print material names in library order")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("resolve-textures")
                .long("resolve-textures")
                .help("Print texture paths relative to the library file's directory")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let mut config = match matches.get_one::<String>("config") {
        Some(path) => MaterialImportConfig::load_from_file(path)
            .with_context(|| format!("Failed to load config {path}"))?,
        None => MaterialImportConfig::default(),
    };
    if matches.get_flag("resolve-textures") {
        config.resolve_texture_paths = true;
    }

    let library = PathBuf::from(
        matches
            .get_one::<String>("library")
            .context("missing library argument")?,
    );
    let loaded = MaterialLoader::load_library(&library, &config)
        .with_context(|| format!("Failed to load material library {}", library.display()))?;
    let model = &loaded.model;

    if model.is_empty() {
        log::warn!("{} declares no materials", library.display());
    }

    if matches.get_flag("summary") {
        for name in model.library() {
            println!("{name}");
        }
        return Ok(());
    }

    if let Some(default) = model.default_material() {
        if *default != Material::new(DEFAULT_MATERIAL_NAME) {
            println!("(properties set before the first newmtl)");
            print_material(default);
        }
    }
    for material in model.iter() {
        print_material(material);
    }
    println!(
        "{} material(s), {} line(s) read from {}",
        model.len(),
        loaded.lines,
        loaded.path.display()
    );

    Ok(())
}

fn print_material(material: &Material) {
    println!("newmtl {}", material.name);
    println!("  Ka    {}", format_color(&material.ambient));
    println!("  Kd    {}", format_color(&material.diffuse));
    println!("  Ks    {}", format_color(&material.specular));
    println!("  d     {}", material.alpha);
    println!("  Ns    {}", material.shininess);
    println!("  illum {}", material.illumination_model);
    if let Some(texture) = &material.texture {
        println!("  map   {texture}");
    }
}

fn format_color(color: &Color3) -> String {
    format!("{} {} {}", color.x, color.y, color.z)
}
