// PDF-to-text extraction boundary. The analysis engine treats whatever text
// comes out of here — placeholder included — as a valid document.

pub mod handlers;
