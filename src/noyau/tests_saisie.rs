//! Tests de scénario : séquences d’appuis clavier -> texte / résultat attendus.

use proptest::prelude::*;

use super::saisie::{Evaluation, Saisie};
use super::erreur::ErreurCalcul;

fn saisie_depuis(touches: &str) -> Saisie {
    let mut s = Saisie::new();
    for c in touches.chars() {
        match c {
            '0'..='9' => s.append_digit(c),
            '.' => s.append_dot(),
            '+' | '-' | '*' | '/' => s.append_operator(c),
            '=' => {
                s.evaluate();
            }
            _ => panic!("touche inconnue {c:?}"),
        }
    }
    s
}

/* ------------------------ Opérateurs ------------------------ */

#[test]
fn operateur_sur_vide_seul_moins() {
    for op in ['+', '*', '/'] {
        let mut s = Saisie::new();
        s.append_operator(op);
        assert_eq!(s.texte(), "", "op={op:?}");
    }

    let mut s = Saisie::new();
    s.append_operator('-');
    assert_eq!(s.texte(), "-");
}

#[test]
fn deux_operateurs_le_second_remplace() {
    let s = saisie_depuis("5+*");
    assert_eq!(s.texte(), "5*");
}

#[test]
fn moins_seul_remplace_litteralement() {
    // "-" puis "+" : l’opérateur final est remplacé, l’évaluation le rejettera
    let mut s = saisie_depuis("-+5");
    assert_eq!(s.texte(), "+5");
    assert!(matches!(
        s.evaluate(),
        Evaluation::Echouee(ErreurCalcul::ExpressionMalformee(_))
    ));
    assert_eq!(s.texte(), "+5=Error");
}

/* ------------------------ Point décimal ------------------------ */

#[test]
fn double_point_idempotent() {
    let s = saisie_depuis("3..");
    assert_eq!(s.texte(), "3.");
}

#[test]
fn point_par_morceau() {
    let s = saisie_depuis("1.5+2.5.");
    assert_eq!(s.texte(), "1.5+2.5");
}

/* ------------------------ x² ------------------------ */

#[test]
fn carre_du_nombre_final() {
    let mut s = saisie_depuis("5+3");
    s.square_current();
    assert_eq!(s.texte(), "5+9");
}

/* ------------------------ Évaluation ------------------------ */

#[test]
fn evaluation_priorites() {
    let mut s = saisie_depuis("2+3*4");
    assert_eq!(s.evaluate(), Evaluation::Reussie("14".into()));
    assert_eq!(s.result_text(), "14");
    assert_eq!(s.texte(), "2+3*4=14");
}

#[test]
fn evaluation_fraction() {
    let s = saisie_depuis("1/3=");
    assert_eq!(s.result_text(), "0.333333");
}

#[test]
fn evaluation_division_par_zero() {
    let mut s = saisie_depuis("5/0");
    assert_eq!(
        s.evaluate(),
        Evaluation::Echouee(ErreurCalcul::ErreurMathematique)
    );
    assert_eq!(s.result_text(), "Error");
    assert_eq!(s.texte(), "5/0=Error");
}

/* ------------------------ Après une évaluation ------------------------ */

#[test]
fn chiffre_apres_evaluation_repart_de_zero() {
    let mut s = saisie_depuis("2+3*4=");
    assert_eq!(s.texte(), "2+3*4=14");
    s.append_digit('7');
    assert_eq!(s.texte(), "7");
    assert_eq!(s.result_text(), "");
}

#[test]
fn operateur_apres_evaluation_chaine() {
    let mut s = saisie_depuis("2+3*4=");
    s.append_operator('+');
    assert_eq!(s.texte(), "14+");
    assert_eq!(s.result_text(), "");
}

#[test]
fn chainage_complet() {
    let s = saisie_depuis("2+3*4=+1=");
    assert_eq!(s.texte(), "14+1=15");
    assert_eq!(s.result_text(), "15");
}

#[test]
fn chainage_depuis_resultat_negatif() {
    let s = saisie_depuis("2-5=*3=");
    assert_eq!(s.texte(), "-3*3=-9");
}

#[test]
fn apres_erreur_operateur_ignore() {
    let mut s = saisie_depuis("5/0=");
    s.append_operator('+');
    assert_eq!(s.texte(), "5/0=Error");
    s.square_current();
    assert_eq!(s.texte(), "5/0=Error");
}

#[test]
fn apres_erreur_chiffre_repart_de_zero() {
    let mut s = saisie_depuis("5/0=");
    s.append_digit('8');
    assert_eq!(s.texte(), "8");
    assert_eq!(s.result_text(), "");
}

#[test]
fn point_apres_evaluation_repart_de_zero() {
    let mut s = saisie_depuis("1+1=");
    s.append_dot();
    assert_eq!(s.texte(), "0.");
}

/* ------------------------ Propriétés ------------------------ */

proptest! {
    #[test]
    fn suite_de_chiffres_affichee_telle_quelle(chiffres in "[0-9]{1,30}") {
        let mut s = Saisie::new();
        for d in chiffres.chars() {
            s.append_digit(d);
        }
        prop_assert_eq!(s.display_text(), chiffres.clone());
        prop_assert_eq!(s.texte(), chiffres.as_str());
    }
}
