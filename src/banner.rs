//! Usage banner shown before every session launch

/// Render the shell banner and knightly command reference.
pub fn render() -> String {
    let mut text = String::new();
    text.push_str("\n=== Welcome to the Jarlang Shell! ===\n");
    text.push_str("REGALLLI! Prepare to wield your code like a true JarKnight!\n");
    text.push_str("\nKnightly Commandments:\n");
    text.push_str("  summon \"file.vase\"   # Import a scroll of wisdom\n");
    text.push_str("  wield x 10              # Wield a variable with valor\n");
    text.push_str("  vow y 42                # Declare a sacred constant\n");
    text.push_str("  sacred z \"legend\"      # Declare a truly sacred variable\n");
    text.push_str("  lest x < 5 {...}        # Repeat whilst the quest endures (while loop)\n");
    text.push_str("  endure ...              # For-loop, for the persistent knight\n");
    text.push_str("  forge fn(a,b) ...       # Forge a function in the fires of code\n");
    text.push_str("  chant \"Hello!\"         # Chant your message to the realm\n");
    text.push_str("  !run file.vase          # Run a scroll in the shell\n");
    text.push_str("  q!                      # Retreat from the shell\n");
    text.push_str("===============================\n");
    text
}

/// Print the banner to stdout.
pub fn print() {
    println!("{}", render());
}
