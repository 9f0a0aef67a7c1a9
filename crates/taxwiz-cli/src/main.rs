use taxwiz::{config, logging, provider_from_config, ChatAssistant};
use taxwiz_adapters::{Latency, WizardKind};
use taxwiz_core::{Answers, FileDescriptor, StepOutcome, WizardError, WizardMachine};
use tracing::debug;

const USAGE: &str = "Uso:
  taxwiz-cli steps --wizard <tax-form|booking|investment>
  taxwiz-cli run --wizard <KIND> --answers '<JSON array, un objeto por paso>' [--file <campo>:<nombre>:<mime>:<bytes>]...
  taxwiz-cli chat <mensaje>...";

/// Archivo pedido con `--file`, pendiente de adjuntar cuando su campo esté
/// en el paso actual.
struct PendingFile {
    field_id: String,
    file: FileDescriptor,
}

fn parse_file_arg(raw: &str) -> Option<PendingFile> {
    let mut parts = raw.splitn(4, ':');
    let field_id = parts.next()?.to_string();
    let name = parts.next()?;
    let mime = parts.next()?;
    let size = parts.next()?.parse::<u64>().ok()?;
    Some(PendingFile { field_id,
                       file: FileDescriptor::new(name, size).with_mime_type(mime) })
}

#[tokio::main]
async fn main() {
    // config() carga .env una sola vez
    let cfg = match config() {
        Ok(c) => c,
        Err(e) => { eprintln!("[taxwiz] {e}"); std::process::exit(2); }
    };
    if let Err(e) = logging::init_logging(&cfg.log_filter) {
        eprintln!("[taxwiz] {e}");
        std::process::exit(2);
    }

    let args: Vec<String> = std::env::args().collect();
    let command = args.get(1).map(String::as_str).unwrap_or("");

    if command == "chat" {
        let mut chat = ChatAssistant::new(provider_from_config(cfg));
        for prompt in &args[2..] {
            if let Some(reply) = chat.send(prompt).await {
                println!("> {prompt}\n{}", reply.content);
                for link in &reply.links {
                    println!("  [{:?}] {} ({})", link.icon, link.text, link.url);
                }
            }
        }
        std::process::exit(0);
    }

    if command != "steps" && command != "run" {
        eprintln!("{USAGE}");
        std::process::exit(2);
    }

    let mut wizard: Option<WizardKind> = None;
    let mut answers_json: Option<String> = None;
    let mut files: Vec<PendingFile> = Vec::new();
    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "--wizard" => { i += 1; if i < args.len() { wizard = args[i].parse().ok(); } }
            "--answers" => { i += 1; if i < args.len() { answers_json = Some(args[i].clone()); } }
            "--file" => {
                i += 1;
                match args.get(i).and_then(|a| parse_file_arg(a)) {
                    Some(f) => files.push(f),
                    None => { eprintln!("[taxwiz {command}] --file espera <campo>:<nombre>:<mime>:<bytes>"); std::process::exit(2); }
                }
            }
            _ => {}
        }
        i += 1;
    }

    let Some(kind) = wizard else {
        eprintln!("{USAGE}");
        std::process::exit(2);
    };
    let registry = match kind.registry() {
        Ok(r) => r,
        Err(e) => { eprintln!("[taxwiz {command}] {e}"); std::process::exit(5); }
    };

    if command == "steps" {
        for (idx, step) in registry.iter().enumerate() {
            println!("{}. {} [{}] {}", idx + 1, step.title, step.id, step.description);
            for field in &step.fields {
                let marker = if field.required { "*" } else { " " };
                println!("   {marker} {:<24} {:?} {}", field.id, field.kind, field.label);
                if !field.options.is_empty() {
                    println!("       opciones: {}", field.options.join(" | "));
                }
            }
        }
        std::process::exit(0);
    }

    let per_step: Vec<Answers> = match answers_json.as_deref().map(serde_json::from_str) {
        Some(Ok(v)) => v,
        Some(Err(e)) => { eprintln!("[taxwiz run] --answers JSON parse error: {e}"); std::process::exit(3); }
        None => vec![Answers::new(); registry.step_count()],
    };

    let generator = kind.generator(&registry, Latency::of(cfg.generation_latency));
    let session = WizardMachine::builder(registry.clone()).into_session(generator);
    let mut per_step = per_step.into_iter();
    loop {
        let step = match session.current_step() {
            Ok(s) => s,
            Err(e) => { eprintln!("[taxwiz run] {e}"); std::process::exit(5); }
        };
        for pending in files.iter().filter(|f| step.is_file_field(&f.field_id)) {
            if let Err(e) = session.attach_file(&pending.field_id, pending.file.clone()) {
                eprintln!("[taxwiz run] {e}");
                std::process::exit(4);
            }
        }
        let progress = session.progress();
        debug!("step {} of {} ({})", progress.step_number, progress.step_count, step.id);
        match session.submit_step(per_step.next().unwrap_or_default()).await {
            Ok(StepOutcome::Advanced { .. }) => continue,
            Ok(StepOutcome::Completed(artifact)) => {
                match serde_json::to_string_pretty(&artifact) {
                    Ok(s) => println!("{s}"),
                    Err(e) => { eprintln!("[taxwiz run] {e}"); std::process::exit(5); }
                }
                std::process::exit(0);
            }
            Err(WizardError::Validation(errors)) => {
                eprintln!("[taxwiz run] paso `{}` rechazado:", step.id);
                for err in errors {
                    eprintln!("  - {err}");
                }
                std::process::exit(4);
            }
            Err(e) => { eprintln!("[taxwiz run] {e}"); std::process::exit(5); }
        }
    }
}
