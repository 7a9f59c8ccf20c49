

use std::env;
use std::path::PathBuf;

use tcm_consult::toolkit::inference::LIST_DELIMITER;
use tcm_consult::{Catalog, ConsultConfig, ConsultationIntake, ConsultationManager};
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Default)]
struct Args {
    diseases: Vec<String>,
    symptoms: Vec<String>,
    catalog: Option<String>,
    config: Option<PathBuf>,
    aliases: Option<String>,
    list_diseases: bool,
    list_symptoms: bool,
    stats: bool,
    json: bool,
    help: bool,
}

fn parse_args() -> Args {
    let args: Vec<String> = env::args().collect();
    let mut parsed = Args::default();

    let mut i = 1;
    while i < args.len() {
        let value = args.get(i + 1).cloned();
        match args[i].as_str() {
            "--disease" | "-d" => {
                if let Some(v) = value {
                    parsed.diseases.push(v);
                    i += 1;
                }
            }
            "--symptom" | "-s" => {
                if let Some(v) = value {
                    parsed.symptoms.push(v);
                    i += 1;
                }
            }
            "--catalog" | "-c" => {
                if value.is_some() {
                    parsed.catalog = value;
                    i += 1;
                }
            }
            "--config" => {
                if let Some(v) = value {
                    parsed.config = Some(PathBuf::from(v));
                    i += 1;
                }
            }
            "--aliases" => {
                if value.is_some() {
                    parsed.aliases = value;
                    i += 1;
                }
            }
            "--list-diseases" => parsed.list_diseases = true,
            "--list-symptoms" => parsed.list_symptoms = true,
            "--stats" => parsed.stats = true,
            "--json" => parsed.json = true,
            "--help" | "-h" => parsed.help = true,
            other => eprintln!("Ignoring unknown argument: {}", other),
        }
        i += 1;
    }

    parsed
}

fn print_help() {
    println!("tcm-consult - chronic-disease TCM syndrome inference");
    println!();
    println!("USAGE:");
    println!("    tcm-consult [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -d, --disease <ID>      Selected disease id (repeatable)");
    println!("    -s, --symptom <TEXT>    Observed symptom phrase (repeatable)");
    println!("    -c, --catalog <PATH>    JSON catalog to use instead of the built-in one");
    println!("        --config <PATH>     Config file (TOML/JSON/YAML)");
    println!("        --list-diseases     Print the catalog's diseases");
    println!("        --list-symptoms     Print symptoms for the selected diseases (or all)");
    println!("        --aliases <ID>      Print the TCM aliases of a disease");
    println!("        --stats             Print catalog statistics");
    println!("        --json              Emit JSON instead of text");
    println!("    -h, --help              Print help");
    println!();
    println!("ENVIRONMENT:");
    println!("    TCM_CONSULT_CATALOG_PATH, TCM_CONSULT_LOG_FILTER, RUST_LOG");
}

fn main() -> anyhow::Result<()> {
    let args = parse_args();
    if args.help {
        print_help();
        return Ok(());
    }

    let mut config = ConsultConfig::load(args.config.as_deref())?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    if args.catalog.is_some() {
        config.catalog_path = args.catalog.clone();
    }
    let loaded = config.load_catalog()?;
    let catalog: &Catalog = loaded.as_ref().unwrap_or(Catalog::builtin());
    debug!("Catalog fingerprint: {}", catalog.fingerprint());

    let manager = ConsultationManager::new(catalog, config);

    if args.stats {
        let stats = manager.stats();
        if args.json {
            println!("{}", serde_json::to_string_pretty(&stats)?);
        } else {
            println!("diseases:          {}", stats.total_diseases);
            println!("syndromes:         {}", stats.total_syndromes);
            println!("tcm symptoms:      {}", stats.total_tcm_symptoms);
            println!("western symptoms:  {}", stats.total_western_symptoms);
            println!("distinct symptoms: {}", stats.distinct_symptoms);
            println!("fingerprint:       {}", catalog.fingerprint());
        }
        return Ok(());
    }

    if args.list_diseases {
        if args.json {
            println!("{}", serde_json::to_string_pretty(catalog.diseases())?);
        } else {
            for disease in catalog.diseases() {
                println!("{}\t{}\t{}", disease.id, disease.name, disease.name_en);
            }
        }
        return Ok(());
    }

    if let Some(id) = &args.aliases {
        let aliases = catalog.tcm_aliases(id);
        if args.json {
            println!("{}", serde_json::to_string(aliases)?);
        } else {
            println!("{}", aliases.join(LIST_DELIMITER));
        }
        return Ok(());
    }

    if args.list_symptoms {
        let symptoms = manager.symptoms_for(&args.diseases);
        if args.json {
            println!("{}", serde_json::to_string_pretty(&symptoms)?);
        } else {
            for symptom in symptoms {
                println!("{}\t{}\t{}", symptom.id, symptom.kind, symptom.name);
            }
        }
        return Ok(());
    }

    let intake = ConsultationIntake {
        diseases: args.diseases,
        symptoms: args.symptoms,
    };
    let report = manager.report(&intake);

    if args.json {
        println!("{}", report.to_json()?);
    } else {
        println!("{}", report.description.trim_end());
    }

    Ok(())
}
