// output.rs - Formatted heap dumps for the host log sink

use std::io::{self, Write};

/// Write a hex and ASCII dump of `bytes`, 16 per row, labelled with heap
/// addresses starting at `origin`. Row shape:
///
/// `A00000: 00 01 02 03  04 05 06 07 - 08 09 0a 0b  0c 0d 0e 0f  ................`
pub fn dump<W: Write>(w: &mut W, origin: i32, bytes: &[u8]) -> io::Result<()> {
    for (row, chunk) in bytes.chunks(16).enumerate() {
        write!(w, "A{:05x}: ", origin as usize + row * 16)?;

        for col in 0..16 {
            if col > 0 {
                if col == 8 {
                    write!(w, " - ")?;
                } else if col % 4 == 0 {
                    write!(w, "  ")?;
                } else {
                    write!(w, " ")?;
                }
            }
            match chunk.get(col) {
                Some(b) => write!(w, "{:02x}", b)?,
                None => write!(w, "  ")?,
            }
        }

        write!(w, "  ")?;
        for &b in chunk {
            let ch = if (0x20..=0x7e).contains(&b) {
                b as char
            } else {
                '.'
            };
            write!(w, "{}", ch)?;
        }
        writeln!(w)?;
    }
    w.flush()
}

#[cfg(test)]
mod tests {
    use super::dump;

    fn render(origin: i32, bytes: &[u8]) -> String {
        let mut out = Vec::new();
        dump(&mut out, origin, bytes).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn full_row() {
        let bytes: Vec<u8> = (0..16).collect();
        assert_eq!(
            render(0, &bytes),
            "A00000: 00 01 02 03  04 05 06 07 - 08 09 0a 0b  0c 0d 0e 0f  ................\n"
        );
    }

    #[test]
    fn ascii_gutter_shows_printable_bytes() {
        let text = render(0, b"HELLO WORLD! every byte herexyz!");
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("HELLO WORLD! eve"));
        assert!(lines[1].ends_with("ry byte herexyz!"));
    }

    #[test]
    fn short_row_pads_hex_columns() {
        let text = render(0x40, &[0xff, 0x41, 0x07]);
        // The hex area keeps its full width so the ASCII gutter lines up
        let full = render(0x40, &[0u8; 16]);
        assert!(text.starts_with("A00040: ff 41 07  "));
        assert!(text.ends_with("  .A.\n"));
        assert_eq!(
            text.trim_end_matches(".A.\n").len(),
            full.trim_end_matches(|c| c == '.' || c == '\n').len()
        );
    }

    #[test]
    fn row_addresses_advance_by_sixteen() {
        let bytes = [0u8; 33];
        let text = render(0x100, &bytes);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("A00100: "));
        assert!(lines[1].starts_with("A00110: "));
        assert!(lines[2].starts_with("A00120: "));
    }
}
