//! CLI context - bundles settings, flags, and clipboard state.

use copypasta::{ClipboardContext, ClipboardProvider};
use zeroize::Zeroize;

use super::{CliFlags, help, prompts, quiet};
use crate::pass::{charset, generate, strength};
use crate::rng;
use crate::settings::Settings;

/// Early exit - not an error, just done.
pub struct Done;

/// Application context for CLI mode.
pub struct Context {
    pub settings: Settings,
    pub clipboard: Option<ClipboardContext>,
    pub flags: CliFlags,
}

impl Context {
    /// Create a new context by parsing command-line arguments.
    /// Returns Err with the error message if parsing fails.
    pub fn new(args: &[String]) -> Result<Self, String> {
        let flags = super::parse(args).map_err(|e| e.to_string())?;

        Ok(Self {
            settings: Settings::default(),
            clipboard: None,
            flags,
        })
    }

    /// Run CLI. Returns `Err(Done)` for early exits, `Ok(())` on completion.
    pub fn run(&mut self) -> Result<(), Done> {
        self.handle_info_flags()?;
        quiet::set(self.flags.quiet);
        self.apply_flags();
        self.generate_output();
        Ok(())
    }

    fn handle_info_flags(&self) -> Result<(), Done> {
        if self.flags.help {
            help::print_help();
            return Err(Done);
        }
        if self.flags.version {
            println!("passpanel {}", env!("CARGO_PKG_VERSION"));
            return Err(Done);
        }
        Ok(())
    }

    /// Apply CLI flags to settings.
    fn apply_flags(&mut self) {
        if let Some(len) = self.flags.length {
            self.settings.set_length(len);
        }
        if self.flags.no_upper {
            self.settings.include_uppercase = false;
        }
        if self.flags.no_digits {
            self.settings.include_numbers = false;
        }
        if self.flags.no_symbols {
            self.settings.include_symbols = false;
        }

        if self.flags.clipboard {
            match ClipboardContext::new() {
                Ok(c) => self.clipboard = Some(c),
                Err(_) => {
                    // Fall back to printing, or abort if the user declines
                    if !prompts::clipboard_fallback_prompt() {
                        std::process::exit(0);
                    }
                }
            }
        }
    }

    /// Generate passwords and handle output.
    fn generate_output(&mut self) {
        let mut rng = rng::sampler();
        let count = self.flags.number.unwrap_or(1).max(1);

        let mut passwords: Vec<String> = (0..count)
            .map(|_| generate(&mut rng, &self.settings))
            .collect();

        if let Some(ctx) = self.clipboard.as_mut() {
            let mut joined = passwords.join("\n");
            match ctx.set_contents(joined.clone()) {
                Ok(()) => {
                    if let Ok(mut retrieved) = ctx.get_contents() {
                        retrieved.zeroize();
                    }
                    prompts::clipboard_copied();
                }
                Err(e) => prompts::clipboard_error(&e.to_string()),
            }
            joined.zeroize();
        } else {
            for password in &passwords {
                println!("{}", password);
            }
            if !quiet::enabled() {
                if let Some(last) = passwords.last() {
                    let bits =
                        strength::entropy_bits(last.len(), charset::size(&self.settings));
                    println!(
                        "Strength: {} | {:.1} bits",
                        strength::label(strength::score(last)),
                        bits
                    );
                }
            }
        }

        for password in passwords.iter_mut() {
            password.zeroize();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::{MAX_LENGTH, MIN_LENGTH};

    fn context(flags: CliFlags) -> Context {
        Context {
            settings: Settings::default(),
            clipboard: None,
            flags,
        }
    }

    #[test]
    fn length_flag_is_clamped_into_settings() {
        let mut ctx = context(CliFlags {
            length: Some(100),
            ..Default::default()
        });
        ctx.apply_flags();
        assert_eq!(ctx.settings.length, MAX_LENGTH);

        let mut ctx = context(CliFlags {
            length: Some(2),
            ..Default::default()
        });
        ctx.apply_flags();
        assert_eq!(ctx.settings.length, MIN_LENGTH);
    }

    #[test]
    fn exclusion_flags_drop_classes() {
        let mut ctx = context(CliFlags {
            no_upper: true,
            no_digits: true,
            no_symbols: true,
            ..Default::default()
        });
        ctx.apply_flags();
        assert!(!ctx.settings.include_uppercase);
        assert!(!ctx.settings.include_numbers);
        assert!(!ctx.settings.include_symbols);
    }

    #[test]
    fn defaults_survive_empty_flags() {
        let mut ctx = context(CliFlags::default());
        ctx.apply_flags();
        assert_eq!(ctx.settings, Settings::default());
    }
}
