//! Print summaries for a handful of sample records

use fitstats::{daily_steps_summary, training_summary, UserProfile};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "fitstats=debug,info".into()),
        )
        .init();

    let profile = match UserProfile::from_json(r#"{"weight": 84.6, "height": 1.87}"#) {
        Ok(profile) => profile,
        Err(e) => {
            eprintln!("Error: {e}");
            return;
        }
    };

    let daily = ["678,0h50m", "792,1h14m", "1078,1h30m", "7830,2h40m", "0,1h", "12:40:00, 3456"];
    for line in daily {
        let summary = daily_steps_summary(line, profile.weight, profile.height);
        if !summary.is_empty() {
            println!("{summary}\n");
        }
    }

    let trainings = ["3456,Ходьба,3h00m", "678,Бег,0h5m", "1078,Бег,0h30m", "7892,Плавание,3h10m"];
    for line in trainings {
        println!("{}\n", training_summary(line, profile.weight, profile.height));
    }
}
