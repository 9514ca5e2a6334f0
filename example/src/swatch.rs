use owo_colors::OwoColorize;
use tessera_color::{Argb, ColorScheme, Hct, KeyColorPreset, Variant, contrast::ratio_of_argb};
use tessera_theme::{BuiltTheme, Brightness};

const NAME_WIDTH: usize = 26;

fn block(argb: Argb, text: &str, foreground: Argb) -> String {
    text.truecolor(foreground.red(), foreground.green(), foreground.blue())
        .on_truecolor(argb.red(), argb.green(), argb.blue())
        .to_string()
}

pub fn print_header(built: &BuiltTheme, variant: Variant) {
    let hct = Hct::from_argb(built.key_color);
    println!(
        "{} {} {}  hue {:.1}  chroma {:.1}  tone {:.1}",
        "key".bold(),
        block(built.key_color, "      ", built.key_color),
        built.key_color,
        hct.hue(),
        hct.chroma(),
        hct.tone()
    );
    println!("{} {}", "variant".bold(), variant.name());
}

pub fn print_scheme(scheme: &ColorScheme, brightness: Brightness) {
    println!();
    println!("{}", brightness.name().bold().underline());
    for (name, argb) in scheme.swatches() {
        let content = scheme.content_color_for(argb);
        let sample = match content {
            Some(on) => block(argb, "  Aa  ", on),
            None => block(argb, "      ", argb),
        };
        let ratio = content
            .map(|on| format!("{:>5.2}:1", ratio_of_argb(argb, on)))
            .unwrap_or_default();
        println!("  {sample} {name:<width$} {argb} {ratio}", width = NAME_WIDTH);
    }
}

pub fn print_preset(preset: KeyColorPreset) {
    let argb = preset.argb();
    println!(
        "  {} {:<8} {}",
        block(argb, "      ", argb),
        preset.label(),
        preset.hex()
    );
}
