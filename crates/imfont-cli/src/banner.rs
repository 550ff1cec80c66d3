//! Decorative banners and usage text.

use std::io::{self, Write};

use crossterm::style::Stylize;

/// Version shown in banners.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Author handle shown under every banner.
const AUTHOR: &str = "HK4CRPRASAD";

const IMFONT_ART: &str = r"
 ██▓ ███▄ ▄███▓  █████▒▒█████   ███▄    █ ▄▄▄█████▓
▓██▒▓██▒▀█▀ ██▒▓██   ▒▒██▒  ██▒ ██ ▀█   █ ▓  ██▒ ▓▒
▒██▒▓██    ▓██░▒████ ░▒██░  ██▒▓██  ▀█ ██▒▒ ▓██░ ▒░
░██░▒██    ▒██ ░▓█▒  ░▒██   ██░▓██▒  ▐▌██▒░ ▓██▓ ░
░██░▒██▒   ░██▒░▒█░   ░ ████▓▒░▒██░   ▓██░  ▒██▒ ░
░▓  ░ ▒░   ░  ░ ▒ ░   ░ ▒░▒░▒░ ░ ▒░   ▒ ▒   ▒ ░░
 ▒ ░░  ░      ░ ░       ░ ▒ ▒░ ░ ░░   ░ ▒░    ░
 ▒ ░░      ░    ░ ░   ░ ░ ░ ▒     ░   ░ ░   ░
 ░         ░              ░ ░           ░
";

const FONT2H_ART: &str = r"
███████╗ ██████╗ ███╗   ██╗████████╗██████╗ ██╗  ██╗
██╔════╝██╔═══██╗████╗  ██║╚══██╔══╝╚════██╗██║  ██║
█████╗  ██║   ██║██╔██╗ ██║   ██║    █████╔╝███████║
██╔══╝  ██║   ██║██║╚██╗██║   ██║   ██╔═══╝ ██╔══██║
██║     ╚██████╔╝██║ ╚████║   ██║   ███████╗██║  ██║
╚═╝      ╚═════╝ ╚═╝  ╚═══╝   ╚═╝   ╚══════╝╚═╝  ╚═╝
";

const IMAGE2H_ART: &str = r"
██╗███╗   ███╗ █████╗  ██████╗ ███████╗██████╗ ██╗  ██╗
██║████╗ ████║██╔══██╗██╔════╝ ██╔════╝╚════██╗██║  ██║
██║██╔████╔██║███████║██║  ███╗█████╗   █████╔╝███████║
██║██║╚██╔╝██║██╔══██║██║   ██║██╔══╝  ██╔═══╝ ██╔══██║
██║██║ ╚═╝ ██║██║  ██║╚██████╔╝███████╗███████╗██║  ██║
╚═╝╚═╝     ╚═╝╚═╝  ╚═╝ ╚═════╝ ╚══════╝╚══════╝╚═╝  ╚═╝
";

/// Usage text shown with `--help`-less invocations and after errors.
pub const USAGE: &str = "
    Usage:
      imfont -f <font.ttf> -o <output_name>
      imfont -i [-f <image_folder> -o <output_file>]

    Options:
      -f, --file <PATH>        Font file, or image folder with -i
      -o, --output <PATH>      Output file
      -i, --image              Use image to C++ array tool
      -m, --mode <MODE>        Font mode: compress | no-compress
      -h, --help               Show this help message
";

/// Banner variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Banner {
    /// Shown with the usage text.
    Imfont,
    /// Shown before font conversion.
    Font2h,
    /// Shown before image conversion.
    Image2h,
}

impl Banner {
    const fn art(self) -> &'static str {
        match self {
            Self::Imfont => IMFONT_ART,
            Self::Font2h => FONT2H_ART,
            Self::Image2h => IMAGE2H_ART,
        }
    }

    /// The usage banner omits the version line; the usage text prints it.
    const fn shows_version(self) -> bool {
        !matches!(self, Self::Imfont)
    }
}

/// Writes `banner` followed by the author and version lines.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_banner<W: Write>(out: &mut W, banner: Banner) -> io::Result<()> {
    writeln!(out, "\n")?;
    writeln!(out, "{}", banner.art().bold())?;
    writeln!(
        out,
        "{}{}{}{}",
        "(".green().bold(),
        "GITHUB :- ".cyan().bold(),
        AUTHOR.magenta().bold(),
        " )".green().bold()
    )?;
    writeln!(out, "{}", format!("MADE BY {AUTHOR}").blue().bold())?;
    if banner.shows_version() {
        writeln!(out, "{}", format!("VERSION: {VERSION}").yellow().bold())?;
    }
    writeln!(out, "\n")?;
    out.flush()
}

/// Writes the `IMFONT` banner, the version and the usage text.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_usage<W: Write>(out: &mut W) -> io::Result<()> {
    write_banner(out, Banner::Imfont)?;
    writeln!(out, "Version: {VERSION}")?;
    writeln!(out, "{}", USAGE.cyan())?;
    out.flush()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    fn render(banner: Banner) -> String {
        let mut buf = Vec::new();
        write_banner(&mut buf, banner).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_banner_contains_author() {
        for banner in [Banner::Imfont, Banner::Font2h, Banner::Image2h] {
            let text = render(banner);
            assert!(text.contains("MADE BY HK4CRPRASAD"));
        }
    }

    #[test]
    fn test_banner_version_line() {
        assert!(render(Banner::Font2h).contains(&format!("VERSION: {VERSION}")));
        assert!(render(Banner::Image2h).contains(&format!("VERSION: {VERSION}")));
        assert!(!render(Banner::Imfont).contains("VERSION:"));
    }

    #[test]
    fn test_usage_lists_flags() {
        // Arrange
        let mut buf = Vec::new();

        // Act
        write_usage(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();

        // Assert
        assert!(text.contains(&format!("Version: {VERSION}")));
        for flag in ["--file", "--output", "--image", "--help"] {
            assert!(text.contains(flag), "missing {flag}");
        }
    }
}
