use std::env;
use std::process::ExitCode;

use log::error;

use recipe_harvest::scrape_url;

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let Some(url) = args.get(1) else {
        eprintln!("Usage: recipe-harvest <url>");
        return ExitCode::FAILURE;
    };

    match scrape_url(url) {
        Ok(response) => {
            let status = response.status;
            match serde_json::to_string_pretty(&response) {
                Ok(json) => println!("{json}"),
                Err(err) => {
                    error!("Failed to serialize response: {err}");
                    return ExitCode::FAILURE;
                }
            }
            if status {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Err(err) => {
            error!("Failed to scrape {url}: {err}");
            ExitCode::FAILURE
        }
    }
}
