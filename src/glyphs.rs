//! Bitmap glyph tables
//!
//! Row-major, one byte per row, most significant bit is the leftmost pixel.
//! Both tables cover `' '..='~'` and are indexed by `ch - b' '`.

/// Number of printable ASCII characters covered by each table
pub const GLYPH_COUNT: usize = 95;

/// 6x12 glyphs: a 5x7 face in the top five bits of rows 2..=8, with the sixth
/// column and the outer rows left blank for spacing
pub static FONT_6X12: [[u8; 12]; GLYPH_COUNT] = [
    // ' '
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    // '!'
    [0x00, 0x00, 0x20, 0x20, 0x20, 0x20, 0x20, 0x00, 0x20, 0x00, 0x00, 0x00],
    // '"'
    [0x00, 0x00, 0x50, 0x50, 0x50, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    // '#'
    [0x00, 0x00, 0x50, 0x50, 0xF8, 0x50, 0xF8, 0x50, 0x50, 0x00, 0x00, 0x00],
    // '$'
    [0x00, 0x00, 0x20, 0x78, 0xA0, 0x70, 0x28, 0xF0, 0x20, 0x00, 0x00, 0x00],
    // '%'
    [0x00, 0x00, 0xC0, 0xC8, 0x10, 0x20, 0x40, 0x98, 0x18, 0x00, 0x00, 0x00],
    // '&'
    [0x00, 0x00, 0x60, 0x90, 0xA0, 0x40, 0xA8, 0x90, 0x68, 0x00, 0x00, 0x00],
    // '\''
    [0x00, 0x00, 0x60, 0x20, 0x40, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    // '('
    [0x00, 0x00, 0x10, 0x20, 0x40, 0x40, 0x40, 0x20, 0x10, 0x00, 0x00, 0x00],
    // ')'
    [0x00, 0x00, 0x40, 0x20, 0x10, 0x10, 0x10, 0x20, 0x40, 0x00, 0x00, 0x00],
    // '*'
    [0x00, 0x00, 0x00, 0x20, 0xA8, 0x70, 0xA8, 0x20, 0x00, 0x00, 0x00, 0x00],
    // '+'
    [0x00, 0x00, 0x00, 0x20, 0x20, 0xF8, 0x20, 0x20, 0x00, 0x00, 0x00, 0x00],
    // ','
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x60, 0x20, 0x40, 0x00, 0x00, 0x00],
    // '-'
    [0x00, 0x00, 0x00, 0x00, 0x00, 0xF8, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    // '.'
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x60, 0x60, 0x00, 0x00, 0x00],
    // '/'
    [0x00, 0x00, 0x00, 0x08, 0x10, 0x20, 0x40, 0x80, 0x00, 0x00, 0x00, 0x00],
    // '0'
    [0x00, 0x00, 0x70, 0x88, 0x98, 0xA8, 0xC8, 0x88, 0x70, 0x00, 0x00, 0x00],
    // '1'
    [0x00, 0x00, 0x20, 0x60, 0x20, 0x20, 0x20, 0x20, 0x70, 0x00, 0x00, 0x00],
    // '2'
    [0x00, 0x00, 0x70, 0x88, 0x08, 0x10, 0x20, 0x40, 0xF8, 0x00, 0x00, 0x00],
    // '3'
    [0x00, 0x00, 0xF8, 0x10, 0x20, 0x10, 0x08, 0x88, 0x70, 0x00, 0x00, 0x00],
    // '4'
    [0x00, 0x00, 0x10, 0x30, 0x50, 0x90, 0xF8, 0x10, 0x10, 0x00, 0x00, 0x00],
    // '5'
    [0x00, 0x00, 0xF8, 0x80, 0xF0, 0x08, 0x08, 0x88, 0x70, 0x00, 0x00, 0x00],
    // '6'
    [0x00, 0x00, 0x30, 0x40, 0x80, 0xF0, 0x88, 0x88, 0x70, 0x00, 0x00, 0x00],
    // '7'
    [0x00, 0x00, 0xF8, 0x08, 0x10, 0x20, 0x40, 0x40, 0x40, 0x00, 0x00, 0x00],
    // '8'
    [0x00, 0x00, 0x70, 0x88, 0x88, 0x70, 0x88, 0x88, 0x70, 0x00, 0x00, 0x00],
    // '9'
    [0x00, 0x00, 0x70, 0x88, 0x88, 0x78, 0x08, 0x10, 0x60, 0x00, 0x00, 0x00],
    // ':'
    [0x00, 0x00, 0x00, 0x60, 0x60, 0x00, 0x60, 0x60, 0x00, 0x00, 0x00, 0x00],
    // ';'
    [0x00, 0x00, 0x00, 0x60, 0x60, 0x00, 0x60, 0x20, 0x40, 0x00, 0x00, 0x00],
    // '<'
    [0x00, 0x00, 0x10, 0x20, 0x40, 0x80, 0x40, 0x20, 0x10, 0x00, 0x00, 0x00],
    // '='
    [0x00, 0x00, 0x00, 0x00, 0xF8, 0x00, 0xF8, 0x00, 0x00, 0x00, 0x00, 0x00],
    // '>'
    [0x00, 0x00, 0x40, 0x20, 0x10, 0x08, 0x10, 0x20, 0x40, 0x00, 0x00, 0x00],
    // '?'
    [0x00, 0x00, 0x70, 0x88, 0x08, 0x10, 0x20, 0x00, 0x20, 0x00, 0x00, 0x00],
    // '@'
    [0x00, 0x00, 0x70, 0x88, 0x08, 0x68, 0xA8, 0xA8, 0x70, 0x00, 0x00, 0x00],
    // 'A'
    [0x00, 0x00, 0x70, 0x88, 0x88, 0x88, 0xF8, 0x88, 0x88, 0x00, 0x00, 0x00],
    // 'B'
    [0x00, 0x00, 0xF0, 0x88, 0x88, 0xF0, 0x88, 0x88, 0xF0, 0x00, 0x00, 0x00],
    // 'C'
    [0x00, 0x00, 0x70, 0x88, 0x80, 0x80, 0x80, 0x88, 0x70, 0x00, 0x00, 0x00],
    // 'D'
    [0x00, 0x00, 0xE0, 0x90, 0x88, 0x88, 0x88, 0x90, 0xE0, 0x00, 0x00, 0x00],
    // 'E'
    [0x00, 0x00, 0xF8, 0x80, 0x80, 0xF0, 0x80, 0x80, 0xF8, 0x00, 0x00, 0x00],
    // 'F'
    [0x00, 0x00, 0xF8, 0x80, 0x80, 0xF0, 0x80, 0x80, 0x80, 0x00, 0x00, 0x00],
    // 'G'
    [0x00, 0x00, 0x70, 0x88, 0x80, 0xB8, 0x88, 0x88, 0x78, 0x00, 0x00, 0x00],
    // 'H'
    [0x00, 0x00, 0x88, 0x88, 0x88, 0xF8, 0x88, 0x88, 0x88, 0x00, 0x00, 0x00],
    // 'I'
    [0x00, 0x00, 0x70, 0x20, 0x20, 0x20, 0x20, 0x20, 0x70, 0x00, 0x00, 0x00],
    // 'J'
    [0x00, 0x00, 0x38, 0x10, 0x10, 0x10, 0x10, 0x90, 0x60, 0x00, 0x00, 0x00],
    // 'K'
    [0x00, 0x00, 0x88, 0x90, 0xA0, 0xC0, 0xA0, 0x90, 0x88, 0x00, 0x00, 0x00],
    // 'L'
    [0x00, 0x00, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0xF8, 0x00, 0x00, 0x00],
    // 'M'
    [0x00, 0x00, 0x88, 0xD8, 0xA8, 0xA8, 0x88, 0x88, 0x88, 0x00, 0x00, 0x00],
    // 'N'
    [0x00, 0x00, 0x88, 0x88, 0xC8, 0xA8, 0x98, 0x88, 0x88, 0x00, 0x00, 0x00],
    // 'O'
    [0x00, 0x00, 0x70, 0x88, 0x88, 0x88, 0x88, 0x88, 0x70, 0x00, 0x00, 0x00],
    // 'P'
    [0x00, 0x00, 0xF0, 0x88, 0x88, 0xF0, 0x80, 0x80, 0x80, 0x00, 0x00, 0x00],
    // 'Q'
    [0x00, 0x00, 0x70, 0x88, 0x88, 0x88, 0xA8, 0x90, 0x68, 0x00, 0x00, 0x00],
    // 'R'
    [0x00, 0x00, 0xF0, 0x88, 0x88, 0xF0, 0xA0, 0x90, 0x88, 0x00, 0x00, 0x00],
    // 'S'
    [0x00, 0x00, 0x78, 0x80, 0x80, 0x70, 0x08, 0x08, 0xF0, 0x00, 0x00, 0x00],
    // 'T'
    [0x00, 0x00, 0xF8, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x00, 0x00, 0x00],
    // 'U'
    [0x00, 0x00, 0x88, 0x88, 0x88, 0x88, 0x88, 0x88, 0x70, 0x00, 0x00, 0x00],
    // 'V'
    [0x00, 0x00, 0x88, 0x88, 0x88, 0x88, 0x88, 0x50, 0x20, 0x00, 0x00, 0x00],
    // 'W'
    [0x00, 0x00, 0x88, 0x88, 0x88, 0xA8, 0xA8, 0xA8, 0x50, 0x00, 0x00, 0x00],
    // 'X'
    [0x00, 0x00, 0x88, 0x88, 0x50, 0x20, 0x50, 0x88, 0x88, 0x00, 0x00, 0x00],
    // 'Y'
    [0x00, 0x00, 0x88, 0x88, 0x88, 0x50, 0x20, 0x20, 0x20, 0x00, 0x00, 0x00],
    // 'Z'
    [0x00, 0x00, 0xF8, 0x08, 0x10, 0x20, 0x40, 0x80, 0xF8, 0x00, 0x00, 0x00],
    // '['
    [0x00, 0x00, 0x70, 0x40, 0x40, 0x40, 0x40, 0x40, 0x70, 0x00, 0x00, 0x00],
    // '\\'
    [0x00, 0x00, 0x00, 0x80, 0x40, 0x20, 0x10, 0x08, 0x00, 0x00, 0x00, 0x00],
    // ']'
    [0x00, 0x00, 0x70, 0x10, 0x10, 0x10, 0x10, 0x10, 0x70, 0x00, 0x00, 0x00],
    // '^'
    [0x00, 0x00, 0x20, 0x50, 0x88, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    // '_'
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xF8, 0x00, 0x00, 0x00],
    // '`'
    [0x00, 0x00, 0x40, 0x20, 0x10, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    // 'a'
    [0x00, 0x00, 0x00, 0x00, 0x70, 0x08, 0x78, 0x88, 0x78, 0x00, 0x00, 0x00],
    // 'b'
    [0x00, 0x00, 0x80, 0x80, 0xB0, 0xC8, 0x88, 0x88, 0xF0, 0x00, 0x00, 0x00],
    // 'c'
    [0x00, 0x00, 0x00, 0x00, 0x70, 0x80, 0x80, 0x88, 0x70, 0x00, 0x00, 0x00],
    // 'd'
    [0x00, 0x00, 0x08, 0x08, 0x68, 0x98, 0x88, 0x88, 0x78, 0x00, 0x00, 0x00],
    // 'e'
    [0x00, 0x00, 0x00, 0x00, 0x70, 0x88, 0xF8, 0x80, 0x70, 0x00, 0x00, 0x00],
    // 'f'
    [0x00, 0x00, 0x30, 0x48, 0x40, 0xE0, 0x40, 0x40, 0x40, 0x00, 0x00, 0x00],
    // 'g'
    [0x00, 0x00, 0x00, 0x78, 0x88, 0x88, 0x78, 0x08, 0x70, 0x00, 0x00, 0x00],
    // 'h'
    [0x00, 0x00, 0x80, 0x80, 0xB0, 0xC8, 0x88, 0x88, 0x88, 0x00, 0x00, 0x00],
    // 'i'
    [0x00, 0x00, 0x20, 0x00, 0x60, 0x20, 0x20, 0x20, 0x70, 0x00, 0x00, 0x00],
    // 'j'
    [0x00, 0x00, 0x10, 0x00, 0x30, 0x10, 0x10, 0x90, 0x60, 0x00, 0x00, 0x00],
    // 'k'
    [0x00, 0x00, 0x80, 0x80, 0x90, 0xA0, 0xC0, 0xA0, 0x90, 0x00, 0x00, 0x00],
    // 'l'
    [0x00, 0x00, 0x60, 0x20, 0x20, 0x20, 0x20, 0x20, 0x70, 0x00, 0x00, 0x00],
    // 'm'
    [0x00, 0x00, 0x00, 0x00, 0xD0, 0xA8, 0xA8, 0x88, 0x88, 0x00, 0x00, 0x00],
    // 'n'
    [0x00, 0x00, 0x00, 0x00, 0xB0, 0xC8, 0x88, 0x88, 0x88, 0x00, 0x00, 0x00],
    // 'o'
    [0x00, 0x00, 0x00, 0x00, 0x70, 0x88, 0x88, 0x88, 0x70, 0x00, 0x00, 0x00],
    // 'p'
    [0x00, 0x00, 0x00, 0x00, 0xF0, 0x88, 0xF0, 0x80, 0x80, 0x00, 0x00, 0x00],
    // 'q'
    [0x00, 0x00, 0x00, 0x00, 0x68, 0x98, 0x78, 0x08, 0x08, 0x00, 0x00, 0x00],
    // 'r'
    [0x00, 0x00, 0x00, 0x00, 0xB0, 0xC8, 0x80, 0x80, 0x80, 0x00, 0x00, 0x00],
    // 's'
    [0x00, 0x00, 0x00, 0x00, 0x70, 0x80, 0x70, 0x08, 0xF0, 0x00, 0x00, 0x00],
    // 't'
    [0x00, 0x00, 0x40, 0x40, 0xE0, 0x40, 0x40, 0x48, 0x30, 0x00, 0x00, 0x00],
    // 'u'
    [0x00, 0x00, 0x00, 0x00, 0x88, 0x88, 0x88, 0x98, 0x68, 0x00, 0x00, 0x00],
    // 'v'
    [0x00, 0x00, 0x00, 0x00, 0x88, 0x88, 0x88, 0x50, 0x20, 0x00, 0x00, 0x00],
    // 'w'
    [0x00, 0x00, 0x00, 0x00, 0x88, 0x88, 0xA8, 0xA8, 0x50, 0x00, 0x00, 0x00],
    // 'x'
    [0x00, 0x00, 0x00, 0x00, 0x88, 0x50, 0x20, 0x50, 0x88, 0x00, 0x00, 0x00],
    // 'y'
    [0x00, 0x00, 0x00, 0x00, 0x88, 0x88, 0x78, 0x08, 0x70, 0x00, 0x00, 0x00],
    // 'z'
    [0x00, 0x00, 0x00, 0x00, 0xF8, 0x10, 0x20, 0x40, 0xF8, 0x00, 0x00, 0x00],
    // '{'
    [0x00, 0x00, 0x10, 0x20, 0x20, 0x40, 0x20, 0x20, 0x10, 0x00, 0x00, 0x00],
    // '|'
    [0x00, 0x00, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x00, 0x00, 0x00],
    // '}'
    [0x00, 0x00, 0x40, 0x20, 0x20, 0x10, 0x20, 0x20, 0x40, 0x00, 0x00, 0x00],
    // '~'
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x68, 0x90, 0x00, 0x00, 0x00, 0x00, 0x00],
];

/// 8x16 glyphs
pub static FONT_8X16: [[u8; 16]; GLYPH_COUNT] = [
    // ' '
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    // '!'
    [
        0x00, 0x00, 0x18, 0x3C, 0x3C, 0x3C, 0x18, 0x18,
        0x18, 0x00, 0x18, 0x18, 0x00, 0x00, 0x00, 0x00,
    ],
    // '"'
    [
        0x00, 0x66, 0x66, 0x66, 0x24, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    // '#'
    [
        0x00, 0x00, 0x00, 0x6C, 0x6C, 0xFE, 0x6C, 0x6C,
        0x6C, 0xFE, 0x6C, 0x6C, 0x00, 0x00, 0x00, 0x00,
    ],
    // '$'
    [
        0x18, 0x18, 0x7C, 0xC6, 0xC2, 0xC0, 0x7C, 0x06,
        0x06, 0x86, 0xC6, 0x7C, 0x18, 0x18, 0x00, 0x00,
    ],
    // '%'
    [
        0x00, 0x00, 0x00, 0x00, 0xC2, 0xC6, 0x0C, 0x18,
        0x30, 0x60, 0xC6, 0x86, 0x00, 0x00, 0x00, 0x00,
    ],
    // '&'
    [
        0x00, 0x00, 0x38, 0x6C, 0x6C, 0x38, 0x76, 0xDC,
        0xCC, 0xCC, 0xCC, 0x76, 0x00, 0x00, 0x00, 0x00,
    ],
    // '\''
    [
        0x00, 0x30, 0x30, 0x30, 0x60, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    // '('
    [
        0x00, 0x00, 0x0C, 0x18, 0x30, 0x30, 0x30, 0x30,
        0x30, 0x30, 0x18, 0x0C, 0x00, 0x00, 0x00, 0x00,
    ],
    // ')'
    [
        0x00, 0x00, 0x30, 0x18, 0x0C, 0x0C, 0x0C, 0x0C,
        0x0C, 0x0C, 0x18, 0x30, 0x00, 0x00, 0x00, 0x00,
    ],
    // '*'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x66, 0x3C, 0xFF,
        0x3C, 0x66, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    // '+'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x18, 0x18, 0x7E,
        0x18, 0x18, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    // ','
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x18, 0x18, 0x18, 0x30, 0x00, 0x00, 0x00,
    ],
    // '-'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xFE,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    // '.'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x18, 0x18, 0x00, 0x00, 0x00, 0x00,
    ],
    // '/'
    [
        0x00, 0x00, 0x00, 0x00, 0x02, 0x06, 0x0C, 0x18,
        0x30, 0x60, 0xC0, 0x80, 0x00, 0x00, 0x00, 0x00,
    ],
    // '0'
    [
        0x00, 0x00, 0x38, 0x6C, 0xC6, 0xC6, 0xD6, 0xD6,
        0xC6, 0xC6, 0x6C, 0x38, 0x00, 0x00, 0x00, 0x00,
    ],
    // '1'
    [
        0x00, 0x00, 0x18, 0x38, 0x78, 0x18, 0x18, 0x18,
        0x18, 0x18, 0x18, 0x7E, 0x00, 0x00, 0x00, 0x00,
    ],
    // '2'
    [
        0x00, 0x00, 0x7C, 0xC6, 0x06, 0x0C, 0x18, 0x30,
        0x60, 0xC0, 0xC6, 0xFE, 0x00, 0x00, 0x00, 0x00,
    ],
    // '3'
    [
        0x00, 0x00, 0x7C, 0xC6, 0x06, 0x06, 0x3C, 0x06,
        0x06, 0x06, 0xC6, 0x7C, 0x00, 0x00, 0x00, 0x00,
    ],
    // '4'
    [
        0x00, 0x00, 0x0C, 0x1C, 0x3C, 0x6C, 0xCC, 0xFE,
        0x0C, 0x0C, 0x0C, 0x1E, 0x00, 0x00, 0x00, 0x00,
    ],
    // '5'
    [
        0x00, 0x00, 0xFE, 0xC0, 0xC0, 0xC0, 0xFC, 0x06,
        0x06, 0x06, 0xC6, 0x7C, 0x00, 0x00, 0x00, 0x00,
    ],
    // '6'
    [
        0x00, 0x00, 0x38, 0x60, 0xC0, 0xC0, 0xFC, 0xC6,
        0xC6, 0xC6, 0xC6, 0x7C, 0x00, 0x00, 0x00, 0x00,
    ],
    // '7'
    [
        0x00, 0x00, 0xFE, 0xC6, 0x06, 0x06, 0x0C, 0x18,
        0x30, 0x30, 0x30, 0x30, 0x00, 0x00, 0x00, 0x00,
    ],
    // '8'
    [
        0x00, 0x00, 0x7C, 0xC6, 0xC6, 0xC6, 0x7C, 0xC6,
        0xC6, 0xC6, 0xC6, 0x7C, 0x00, 0x00, 0x00, 0x00,
    ],
    // '9'
    [
        0x00, 0x00, 0x7C, 0xC6, 0xC6, 0xC6, 0x7E, 0x06,
        0x06, 0x06, 0x0C, 0x78, 0x00, 0x00, 0x00, 0x00,
    ],
    // ':'
    [
        0x00, 0x00, 0x00, 0x00, 0x18, 0x18, 0x00, 0x00,
        0x00, 0x18, 0x18, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    // ';'
    [
        0x00, 0x00, 0x00, 0x00, 0x18, 0x18, 0x00, 0x00,
        0x00, 0x18, 0x18, 0x30, 0x00, 0x00, 0x00, 0x00,
    ],
    // '<'
    [
        0x00, 0x00, 0x00, 0x06, 0x0C, 0x18, 0x30, 0x60,
        0x30, 0x18, 0x0C, 0x06, 0x00, 0x00, 0x00, 0x00,
    ],
    // '='
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x7E, 0x00, 0x00,
        0x7E, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    // '>'
    [
        0x00, 0x00, 0x00, 0x60, 0x30, 0x18, 0x0C, 0x06,
        0x0C, 0x18, 0x30, 0x60, 0x00, 0x00, 0x00, 0x00,
    ],
    // '?'
    [
        0x00, 0x00, 0x7C, 0xC6, 0xC6, 0x0C, 0x18, 0x18,
        0x18, 0x00, 0x18, 0x18, 0x00, 0x00, 0x00, 0x00,
    ],
    // '@'
    [
        0x00, 0x00, 0x00, 0x7C, 0xC6, 0xC6, 0xDE, 0xDE,
        0xDE, 0xDC, 0xC0, 0x7C, 0x00, 0x00, 0x00, 0x00,
    ],
    // 'A'
    [
        0x00, 0x00, 0x10, 0x38, 0x6C, 0xC6, 0xC6, 0xFE,
        0xC6, 0xC6, 0xC6, 0xC6, 0x00, 0x00, 0x00, 0x00,
    ],
    // 'B'
    [
        0x00, 0x00, 0xFC, 0x66, 0x66, 0x66, 0x7C, 0x66,
        0x66, 0x66, 0x66, 0xFC, 0x00, 0x00, 0x00, 0x00,
    ],
    // 'C'
    [
        0x00, 0x00, 0x3C, 0x66, 0xC2, 0xC0, 0xC0, 0xC0,
        0xC0, 0xC2, 0x66, 0x3C, 0x00, 0x00, 0x00, 0x00,
    ],
    // 'D'
    [
        0x00, 0x00, 0xF8, 0x6C, 0x66, 0x66, 0x66, 0x66,
        0x66, 0x66, 0x6C, 0xF8, 0x00, 0x00, 0x00, 0x00,
    ],
    // 'E'
    [
        0x00, 0x00, 0xFE, 0x66, 0x62, 0x68, 0x78, 0x68,
        0x60, 0x62, 0x66, 0xFE, 0x00, 0x00, 0x00, 0x00,
    ],
    // 'F'
    [
        0x00, 0x00, 0xFE, 0x66, 0x62, 0x68, 0x78, 0x68,
        0x60, 0x60, 0x60, 0xF0, 0x00, 0x00, 0x00, 0x00,
    ],
    // 'G'
    [
        0x00, 0x00, 0x3C, 0x66, 0xC2, 0xC0, 0xC0, 0xDE,
        0xC6, 0xC6, 0x66, 0x3A, 0x00, 0x00, 0x00, 0x00,
    ],
    // 'H'
    [
        0x00, 0x00, 0xC6, 0xC6, 0xC6, 0xC6, 0xFE, 0xC6,
        0xC6, 0xC6, 0xC6, 0xC6, 0x00, 0x00, 0x00, 0x00,
    ],
    // 'I'
    [
        0x00, 0x00, 0x3C, 0x18, 0x18, 0x18, 0x18, 0x18,
        0x18, 0x18, 0x18, 0x3C, 0x00, 0x00, 0x00, 0x00,
    ],
    // 'J'
    [
        0x00, 0x00, 0x1E, 0x0C, 0x0C, 0x0C, 0x0C, 0x0C,
        0xCC, 0xCC, 0xCC, 0x78, 0x00, 0x00, 0x00, 0x00,
    ],
    // 'K'
    [
        0x00, 0x00, 0xE6, 0x66, 0x66, 0x6C, 0x78, 0x78,
        0x6C, 0x66, 0x66, 0xE6, 0x00, 0x00, 0x00, 0x00,
    ],
    // 'L'
    [
        0x00, 0x00, 0xF0, 0x60, 0x60, 0x60, 0x60, 0x60,
        0x60, 0x62, 0x66, 0xFE, 0x00, 0x00, 0x00, 0x00,
    ],
    // 'M'
    [
        0x00, 0x00, 0xC6, 0xEE, 0xFE, 0xFE, 0xD6, 0xC6,
        0xC6, 0xC6, 0xC6, 0xC6, 0x00, 0x00, 0x00, 0x00,
    ],
    // 'N'
    [
        0x00, 0x00, 0xC6, 0xE6, 0xF6, 0xFE, 0xDE, 0xCE,
        0xC6, 0xC6, 0xC6, 0xC6, 0x00, 0x00, 0x00, 0x00,
    ],
    // 'O'
    [
        0x00, 0x00, 0x7C, 0xC6, 0xC6, 0xC6, 0xC6, 0xC6,
        0xC6, 0xC6, 0xC6, 0x7C, 0x00, 0x00, 0x00, 0x00,
    ],
    // 'P'
    [
        0x00, 0x00, 0xFC, 0x66, 0x66, 0x66, 0x7C, 0x60,
        0x60, 0x60, 0x60, 0xF0, 0x00, 0x00, 0x00, 0x00,
    ],
    // 'Q'
    [
        0x00, 0x00, 0x7C, 0xC6, 0xC6, 0xC6, 0xC6, 0xC6,
        0xC6, 0xD6, 0xDE, 0x7C, 0x0C, 0x0E, 0x00, 0x00,
    ],
    // 'R'
    [
        0x00, 0x00, 0xFC, 0x66, 0x66, 0x66, 0x7C, 0x6C,
        0x66, 0x66, 0x66, 0xE6, 0x00, 0x00, 0x00, 0x00,
    ],
    // 'S'
    [
        0x00, 0x00, 0x7C, 0xC6, 0xC6, 0x60, 0x38, 0x0C,
        0x06, 0xC6, 0xC6, 0x7C, 0x00, 0x00, 0x00, 0x00,
    ],
    // 'T'
    [
        0x00, 0x00, 0x7E, 0x7E, 0x5A, 0x18, 0x18, 0x18,
        0x18, 0x18, 0x18, 0x3C, 0x00, 0x00, 0x00, 0x00,
    ],
    // 'U'
    [
        0x00, 0x00, 0xC6, 0xC6, 0xC6, 0xC6, 0xC6, 0xC6,
        0xC6, 0xC6, 0xC6, 0x7C, 0x00, 0x00, 0x00, 0x00,
    ],
    // 'V'
    [
        0x00, 0x00, 0xC6, 0xC6, 0xC6, 0xC6, 0xC6, 0xC6,
        0xC6, 0x6C, 0x38, 0x10, 0x00, 0x00, 0x00, 0x00,
    ],
    // 'W'
    [
        0x00, 0x00, 0xC6, 0xC6, 0xC6, 0xC6, 0xD6, 0xD6,
        0xD6, 0xFE, 0xEE, 0x6C, 0x00, 0x00, 0x00, 0x00,
    ],
    // 'X'
    [
        0x00, 0x00, 0xC6, 0xC6, 0x6C, 0x7C, 0x38, 0x38,
        0x7C, 0x6C, 0xC6, 0xC6, 0x00, 0x00, 0x00, 0x00,
    ],
    // 'Y'
    [
        0x00, 0x00, 0x66, 0x66, 0x66, 0x66, 0x3C, 0x18,
        0x18, 0x18, 0x18, 0x3C, 0x00, 0x00, 0x00, 0x00,
    ],
    // 'Z'
    [
        0x00, 0x00, 0xFE, 0xC6, 0x86, 0x0C, 0x18, 0x30,
        0x60, 0xC2, 0xC6, 0xFE, 0x00, 0x00, 0x00, 0x00,
    ],
    // '['
    [
        0x00, 0x00, 0x3C, 0x30, 0x30, 0x30, 0x30, 0x30,
        0x30, 0x30, 0x30, 0x3C, 0x00, 0x00, 0x00, 0x00,
    ],
    // '\\'
    [
        0x00, 0x00, 0x00, 0x80, 0xC0, 0x60, 0x30, 0x18,
        0x0C, 0x06, 0x02, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    // ']'
    [
        0x00, 0x00, 0x3C, 0x0C, 0x0C, 0x0C, 0x0C, 0x0C,
        0x0C, 0x0C, 0x0C, 0x3C, 0x00, 0x00, 0x00, 0x00,
    ],
    // '^'
    [
        0x10, 0x38, 0x6C, 0xC6, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    // '_'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0xFF, 0x00, 0x00,
    ],
    // '`'
    [
        0x00, 0x30, 0x18, 0x0C, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    // 'a'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x78, 0x0C, 0x7C,
        0xCC, 0xCC, 0xCC, 0x76, 0x00, 0x00, 0x00, 0x00,
    ],
    // 'b'
    [
        0x00, 0x00, 0xE0, 0x60, 0x60, 0x78, 0x6C, 0x66,
        0x66, 0x66, 0x66, 0x7C, 0x00, 0x00, 0x00, 0x00,
    ],
    // 'c'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x7C, 0xC6, 0xC0,
        0xC0, 0xC0, 0xC6, 0x7C, 0x00, 0x00, 0x00, 0x00,
    ],
    // 'd'
    [
        0x00, 0x00, 0x1C, 0x0C, 0x0C, 0x3C, 0x6C, 0xCC,
        0xCC, 0xCC, 0xCC, 0x76, 0x00, 0x00, 0x00, 0x00,
    ],
    // 'e'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x7C, 0xC6, 0xFE,
        0xC0, 0xC0, 0xC6, 0x7C, 0x00, 0x00, 0x00, 0x00,
    ],
    // 'f'
    [
        0x00, 0x00, 0x1C, 0x36, 0x32, 0x30, 0x78, 0x30,
        0x30, 0x30, 0x30, 0x78, 0x00, 0x00, 0x00, 0x00,
    ],
    // 'g'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x76, 0xCC, 0xCC,
        0xCC, 0xCC, 0xCC, 0x7C, 0x0C, 0xCC, 0x78, 0x00,
    ],
    // 'h'
    [
        0x00, 0x00, 0xE0, 0x60, 0x60, 0x6C, 0x76, 0x66,
        0x66, 0x66, 0x66, 0xE6, 0x00, 0x00, 0x00, 0x00,
    ],
    // 'i'
    [
        0x00, 0x00, 0x18, 0x18, 0x00, 0x38, 0x18, 0x18,
        0x18, 0x18, 0x18, 0x3C, 0x00, 0x00, 0x00, 0x00,
    ],
    // 'j'
    [
        0x00, 0x00, 0x06, 0x06, 0x00, 0x0E, 0x06, 0x06,
        0x06, 0x06, 0x06, 0x06, 0x66, 0x66, 0x3C, 0x00,
    ],
    // 'k'
    [
        0x00, 0x00, 0xE0, 0x60, 0x60, 0x66, 0x6C, 0x78,
        0x78, 0x6C, 0x66, 0xE6, 0x00, 0x00, 0x00, 0x00,
    ],
    // 'l'
    [
        0x00, 0x00, 0x38, 0x18, 0x18, 0x18, 0x18, 0x18,
        0x18, 0x18, 0x18, 0x3C, 0x00, 0x00, 0x00, 0x00,
    ],
    // 'm'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0xEC, 0xFE, 0xD6,
        0xD6, 0xD6, 0xD6, 0xC6, 0x00, 0x00, 0x00, 0x00,
    ],
    // 'n'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0xDC, 0x66, 0x66,
        0x66, 0x66, 0x66, 0x66, 0x00, 0x00, 0x00, 0x00,
    ],
    // 'o'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x7C, 0xC6, 0xC6,
        0xC6, 0xC6, 0xC6, 0x7C, 0x00, 0x00, 0x00, 0x00,
    ],
    // 'p'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0xDC, 0x66, 0x66,
        0x66, 0x66, 0x66, 0x7C, 0x60, 0x60, 0xF0, 0x00,
    ],
    // 'q'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x76, 0xCC, 0xCC,
        0xCC, 0xCC, 0xCC, 0x7C, 0x0C, 0x0C, 0x1E, 0x00,
    ],
    // 'r'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0xDC, 0x76, 0x66,
        0x60, 0x60, 0x60, 0xF0, 0x00, 0x00, 0x00, 0x00,
    ],
    // 's'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x7C, 0xC6, 0x60,
        0x38, 0x0C, 0xC6, 0x7C, 0x00, 0x00, 0x00, 0x00,
    ],
    // 't'
    [
        0x00, 0x00, 0x10, 0x30, 0x30, 0xFC, 0x30, 0x30,
        0x30, 0x30, 0x36, 0x1C, 0x00, 0x00, 0x00, 0x00,
    ],
    // 'u'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0xCC, 0xCC, 0xCC,
        0xCC, 0xCC, 0xCC, 0x76, 0x00, 0x00, 0x00, 0x00,
    ],
    // 'v'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x66, 0x66, 0x66,
        0x66, 0x66, 0x3C, 0x18, 0x00, 0x00, 0x00, 0x00,
    ],
    // 'w'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0xC6, 0xC6, 0xD6,
        0xD6, 0xD6, 0xFE, 0x6C, 0x00, 0x00, 0x00, 0x00,
    ],
    // 'x'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0xC6, 0x6C, 0x38,
        0x38, 0x38, 0x6C, 0xC6, 0x00, 0x00, 0x00, 0x00,
    ],
    // 'y'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0xC6, 0xC6, 0xC6,
        0xC6, 0xC6, 0xC6, 0x7E, 0x06, 0x0C, 0xF8, 0x00,
    ],
    // 'z'
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0xFE, 0xCC, 0x18,
        0x30, 0x60, 0xC6, 0xFE, 0x00, 0x00, 0x00, 0x00,
    ],
    // '{'
    [
        0x00, 0x00, 0x0E, 0x18, 0x18, 0x18, 0x70, 0x18,
        0x18, 0x18, 0x18, 0x0E, 0x00, 0x00, 0x00, 0x00,
    ],
    // '|'
    [
        0x00, 0x00, 0x18, 0x18, 0x18, 0x18, 0x00, 0x18,
        0x18, 0x18, 0x18, 0x18, 0x00, 0x00, 0x00, 0x00,
    ],
    // '}'
    [
        0x00, 0x00, 0x70, 0x18, 0x18, 0x18, 0x0E, 0x18,
        0x18, 0x18, 0x18, 0x70, 0x00, 0x00, 0x00, 0x00,
    ],
    // '~'
    [
        0x00, 0x00, 0x76, 0xDC, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
];
