// src/common/slug.rs

/// Deriva o código de uma empresa a partir do nome: minúsculas, espaços
/// viram hífen, qualquer outro caractere não alfanumérico é descartado.
/// Hífens consecutivos são colapsados e os das pontas removidos.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());

    for ch in name.chars() {
        if ch.is_alphanumeric() {
            slug.extend(ch.to_lowercase());
        } else if ch.is_whitespace() || ch == '-' {
            if !slug.ends_with('-') {
                slug.push('-');
            }
        }
        // pontuação e símbolos caem fora
    }

    slug.trim_matches('-').to_string()
}

#[cfg(test)]
mod tests {
    use super::slugify;

    #[test]
    fn lowercases_simple_names() {
        assert_eq!(slugify("Nvidia"), "nvidia");
        assert_eq!(slugify("IBM"), "ibm");
    }

    #[test]
    fn whitespace_becomes_single_hyphen() {
        assert_eq!(slugify("Acme Corp"), "acme-corp");
        assert_eq!(slugify("Acme   Corp"), "acme-corp");
    }

    #[test]
    fn strips_punctuation() {
        assert_eq!(slugify("O'Reilly & Sons, Inc."), "oreilly-sons-inc");
        assert_eq!(slugify("AT&T"), "att");
    }

    #[test]
    fn trims_edge_hyphens() {
        assert_eq!(slugify("  Acme  "), "acme");
        assert_eq!(slugify("- Acme -"), "acme");
    }
}
