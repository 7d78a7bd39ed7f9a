// src/noyau/format.rs

/// Précision de l’affichage décimal (avant rognage des zéros).
pub const DECIMALES_AFFICHAGE: usize = 6;

/// Forme canonique d’un f64 fini :
/// - entier (v % 1 == 0) : sans partie fractionnaire, sans séparateur
/// - sinon : 6 décimales, zéros finaux puis point final retirés
///
/// `-0` s’affiche `0`.
pub fn format_nombre(v: f64) -> String {
    if v % 1.0 == 0.0 {
        // `{}` sur un f64 entier n’écrit ni ".0" ni exposant
        let s = format!("{v}");
        return normalise_zero(s);
    }

    let mut s = format!("{v:.prec$}", prec = DECIMALES_AFFICHAGE);
    if s.contains('.') {
        while s.ends_with('0') {
            s.pop();
        }
        if s.ends_with('.') {
            s.pop();
        }
    }
    normalise_zero(s)
}

fn normalise_zero(s: String) -> String {
    if s == "-0" {
        "0".to_string()
    } else {
        s
    }
}
