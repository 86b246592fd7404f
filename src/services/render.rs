use std::io::{self, Write};

/// Writes one `unsigned char <identifier>[] = { ... };` block followed by a
/// blank line. All bytes go on a single line after the opening brace.
pub fn write_declaration<W: Write>(out: &mut W, identifier: &str, data: &[u8]) -> io::Result<()> {
    writeln!(out, "unsigned char {}[] = {{", identifier)?;
    write!(out, "    ")?;
    for (i, byte) in data.iter().enumerate() {
        if i > 0 {
            write!(out, ", ")?;
        }
        write!(out, "0x{:02x}", byte)?;
    }
    write!(out, "\n}};\n\n")?;
    Ok(())
}
