//! `fnorm clean <text>` – run the clean transform on its own.

use fnorm_core::config::FnormConfig;
use fnorm_core::{clean, Substitutions};

pub fn run_clean(cfg: &FnormConfig, text: &str, no_substitutions: bool) {
    println!("{}", clean_text(cfg, text, no_substitutions));
}

fn clean_text(cfg: &FnormConfig, text: &str, no_substitutions: bool) -> String {
    let table = if no_substitutions {
        Substitutions::none()
    } else {
        cfg.substitutions()
    };
    clean(text, &table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uses_configured_table() {
        let cfg = FnormConfig::default();
        assert_eq!(clean_text(&cfg, " Grüße - aus Köln ", false), "Gruesse-aus_Koeln");
        assert_eq!(clean_text(&cfg, "Köln", true), "K_ln");
    }
}
