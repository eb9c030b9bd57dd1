//! Boxed help text for client mode.

use crate::terminal::{box_bottom, box_line, box_line_center, box_opt, box_top};

pub fn print_help() {
    box_top("Passpanel");
    box_line_center("Terminal password generator");
    box_line("");
    box_line("MODES:");
    box_line("  1) Panel: Run without arguments. Opens an interactive panel");
    box_line("     with a length slider, class toggles, a strength meter, and");
    box_line("     a copy-to-clipboard key.");
    box_line("  2) Client: Pass flags directly (e.g., -l 16 -n 3) to print");
    box_line("     passwords without the panel.");
    box_line("");
    box_line("USAGE:");
    box_line("  passpanel [OPTIONS]");
    box_line("");
    box_line("OPTIONS:");
    box_line(" Password:");
    box_opt("  -l, --length <N>", "Characters per password, 6-30 (default: 12)");
    box_opt("  -n, --number <N>", "How many to generate (default: 1)");
    box_opt("      --no-upper", "Drop uppercase letters");
    box_opt("      --no-digits", "Drop digits");
    box_opt("      --no-symbols", "Drop symbols");
    box_line("");
    box_line(" Output:");
    box_opt("  -b, --board", "Copy to clipboard instead of printing");
    box_opt("  -q, --quiet", "Print passwords only, no strength summary");
    box_line("");
    box_line(" Info:");
    box_opt("  -h, --help", "Display this help message");
    box_opt("  -v, --version", "Display version");
    box_line("");
    box_line("EXAMPLES:");
    box_line("  passpanel                Interactive panel");
    box_line("  passpanel -l 16          One password, 16 characters");
    box_line("  passpanel -l 20 -n 3 -q  Three passwords, quiet");
    box_line("");
    box_line("Lowercase letters are always included. Randomness comes from a");
    box_line("fast non-cryptographic PRNG seeded by the OS.");
    box_bottom();
}
