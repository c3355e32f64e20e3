pub mod commands;

use std::io::{self, Write};

use crate::chat::{ConversationStore, Message};
use crate::cli::commands::Commands;
use crate::config::AppConfig;
use crate::consultant::{ConsultantClient, RelayError};
use crate::prompts;

pub async fn run_cli(command: Commands, config_path: String) {
    match command {
        Commands::Serve => {
            panic!("Serve command should be intercepted by main.rs to boot actix-web");
        }
        Commands::Templates => {
            println!("{:<24} | {:<2} | {:<8} | {}", "KEY", "", "标题", "说明");
            println!("{:-<24}-+-{:-<2}-+-{:-<8}-+-{:-<32}", "", "", "", "");
            for t in prompts::templates() {
                println!(
                    "{:<24} | {:<2} | {:<8} | {}",
                    t.key, t.icon, t.title, t.description
                );
            }
        }
        Commands::Chat { template, relay } => {
            let config = AppConfig::load(&config_path).expect("Failed to load config");
            let relay_url = relay.unwrap_or_else(|| {
                format!("http://{}:{}", config.server.host, config.server.port)
            });
            run_repl(template, relay_url).await;
        }
    }
}

async fn run_repl(template: Option<String>, relay_url: String) {
    let mut store = match template.as_deref() {
        Some(key) => ConversationStore::with_template("终端咨询会话", key),
        None => ConversationStore::new("终端咨询会话"),
    };
    let client = ConsultantClient::new(&relay_url);

    println!("--- 明远中学 AI 升学咨询 ---");
    println!("Relay: {}", relay_url);
    println!("输入 /template <KEY> 切换场景，/exit 退出。");
    println!("----------------------------");
    if let Some(notice) = store.messages().last() {
        println!("[{}]", notice.content);
    }

    loop {
        print!("\n你> ");
        io::stdout().flush().unwrap();

        let mut input = String::new();
        if io::stdin().read_line(&mut input).is_err() {
            break;
        }
        let text = input.trim();

        if text.is_empty() {
            continue;
        }
        if text == "/exit" || text == "/quit" {
            break;
        }
        if let Some(key) = text.strip_prefix("/template ") {
            let notice = store.switch_template(key);
            println!("[{}]", notice.content);
            continue;
        }

        store.append(Message::user(text));

        match client.send(store.messages(), store.system_prompt()).await {
            Ok(reply) => {
                println!("顾问> {}", reply.content);
                store.append(reply);
            }
            Err(RelayError::Status { status, message }) => {
                eprintln!("咨询失败 ({}): {}", status, message);
            }
            Err(e) => {
                eprintln!("咨询失败: {}", e);
            }
        }
    }
}
