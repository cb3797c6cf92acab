/// Outcome of validating a candidate image.
///
/// Always produced synchronously and never raised as an error: callers
/// check `is_valid` before handing the image to the scan pipeline. The
/// messages are the locale strings shown verbatim in the UI.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationReport {
    pub is_valid: bool,
    pub message: String,
}

impl ValidationReport {
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            message: "Arquivo válido".to_string(),
        }
    }

    pub fn missing_file() -> Self {
        Self {
            is_valid: false,
            message: "Nenhum arquivo selecionado".to_string(),
        }
    }

    pub fn unsupported_format() -> Self {
        Self {
            is_valid: false,
            message: "Formato não suportado. Use JPG, PNG ou WebP.".to_string(),
        }
    }

    pub fn oversized() -> Self {
        Self {
            is_valid: false,
            message: "Arquivo muito grande. Tamanho máximo: 10MB.".to_string(),
        }
    }
}
