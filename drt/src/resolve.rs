//! Rule-based pronoun resolution over the enclosing-DRS trail.
//!
//! One pass over the trail (outermost ancestor first) gathers the feature
//! and referent context; eligibility filters and a small ranking policy then
//! pick the antecedent. Ambiguity is not broken here: when several
//! candidates survive, the whole ranked set is returned and disambiguation
//! is left to the consumer.

use crate::antecedents::PossibleEventAntecedents;
use crate::drs::{Drs, FeatureMap, FeatureSet};
use crate::error::DrtError;
use crate::expr::{AppKind, DrtExpression, PronounKind};
use crate::symbols::Variable;
use rustc_hash::FxHashMap;

/// Resolve one pronoun condition against its ancestor trail, producing an
/// equality condition binding the pronoun's variable to the antecedent (or
/// to the ranked candidate set when several remain).
pub(crate) fn resolve_pronoun(
    kind: PronounKind,
    pro_var: Variable,
    trail: &[&Drs],
) -> Result<DrtExpression, DrtError> {
    let mut candidates = PossibleEventAntecedents::new();
    let mut pronouns: Vec<Variable> = Vec::new();
    let mut features = FeatureMap::default();
    let mut refs: Vec<Variable> = Vec::new();
    let mut roles: FxHashMap<Variable, DrtExpression> = FxHashMap::default();
    let mut events: FxHashMap<Variable, Variable> = FxHashMap::default();
    let mut pro_features: Option<FeatureSet> = None;
    let mut pro_role: Option<DrtExpression> = None;
    let mut pro_event: Option<Variable> = None;

    // Context scan: accumulate feature maps and referent order from the
    // outermost ancestor inward. The pronoun's own feature set is fixed the
    // first time its variable shows up in the running map.
    for ancestor in trail {
        features.extend(ancestor.features.iter().map(|(k, fs)| (*k, fs.clone())));
        refs.extend_from_slice(&ancestor.refs);
        if pro_features.is_none() {
            pro_features = features.get(&pro_var).cloned();
        }
        for cond in &ancestor.conds {
            let DrtExpression::Application(app) = cond else {
                continue;
            };
            match app.kind {
                AppKind::Role => {
                    let (Some(participant), Some(event)) = (app.participant(), app.event())
                    else {
                        continue;
                    };
                    if participant == pro_var {
                        pro_role = app.role().cloned();
                        pro_event = Some(event);
                    } else if let Some(pf) = &pro_features {
                        // exact feature match, introduced strictly earlier
                        let matching = features.get(&participant) == Some(pf);
                        let participant_pos = refs.iter().position(|r| *r == participant);
                        let pro_pos = refs.iter().position(|r| *r == pro_var);
                        let earlier = matches!(
                            (participant_pos, pro_pos),
                            (Some(c), Some(p)) if c < p
                        );
                        if matching && earlier && candidates.position(participant).is_none() {
                            candidates.push(participant, 0);
                            if let Some(role) = app.role() {
                                roles.insert(participant, role.clone());
                            }
                            events.insert(participant, event);
                        }
                    }
                }
                AppKind::Pronoun(_) => {
                    if let Some(v) = app.argument_variable() {
                        pronouns.push(v);
                    }
                }
                _ => {}
            }
        }
    }

    // Eligibility: pronouns cannot antecede other pronouns, except for
    // reflexives. Plain pronouns cannot corefer with a co-participant of
    // their own event; reflexives and possessives must.
    if kind != PronounKind::Reflexive {
        candidates = candidates.exclude(&pronouns);
    }
    let mut eligible = PossibleEventAntecedents::new();
    for (variable, rank) in candidates.iter() {
        let same_event =
            pro_event.is_some() && events.get(&variable).copied() == pro_event;
        let keep = match kind {
            PronounKind::Anaphoric => !same_event,
            PronounKind::Reflexive | PronounKind::Possessive => same_event,
        };
        if keep {
            eligible.push(variable, rank);
        }
    }

    // Ranking, only when the outcome is still ambiguous: +1 for a role that
    // matches the pronoun's own role, plus a proximity bonus equal to the
    // candidate's rank-order index by introduction position, so referents
    // introduced closer to the pronoun come out ahead.
    if eligible.len() > 1 {
        for i in 0..eligible.len() {
            let (variable, _) = eligible.get(i);
            if pro_role.is_some() && roles.get(&variable) == pro_role.as_ref() {
                eligible.bump_at(i, 1);
            }
        }
        let mut order: Vec<(usize, Variable)> = eligible
            .iter()
            .filter_map(|(v, _)| refs.iter().position(|r| *r == v).map(|p| (p, v)))
            .collect();
        order.sort_by_key(|(position, _)| *position);
        for (bonus, (_, variable)) in order.into_iter().enumerate() {
            if let Some(i) = eligible.position(variable) {
                eligible.bump_at(i, bonus as i32);
            }
        }
    }

    match eligible.len() {
        0 => Err(DrtError::Anaphora {
            variable: pro_var.to_string(),
        }),
        1 => Ok(equality(pro_var, DrtExpression::Variable(eligible.get(0).0))),
        _ => Ok(equality(pro_var, DrtExpression::Antecedents(eligible))),
    }
}

fn equality(pro_var: Variable, resolution: DrtExpression) -> DrtExpression {
    DrtExpression::Equality(
        Box::new(DrtExpression::Variable(pro_var)),
        Box::new(resolution),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    fn resolve(input: &str) -> Result<DrtExpression, DrtError> {
        parse(input).expect("input must parse").simplify().resolve(&[])
    }

    fn resolved_to_string(input: &str) -> String {
        resolve(input).expect("input must resolve").to_string()
    }

    #[test]
    fn single_candidate_binds_directly() {
        let out = resolved_to_string(
            "([x{masc,sg},e],[boy(x), walk(e), Agent(e,x)]) + \
             ([u{masc,sg},e1],[PRO(u), smile(e1), Agent(e1,u)])",
        );
        assert_eq!(
            out,
            "([x{masc,sg},e,u{masc,sg},e1],\
             [boy(x), walk(e), Agent(e,x), (u = x), smile(e1), Agent(e1,u)])"
        );
    }

    #[test]
    fn feature_mismatch_fails() {
        let err = resolve(
            "([x{masc,sg},e],[boy(x), Agent(e,x)]) + \
             ([u{fem,sg},e1],[PRO(u), Agent(e1,u)])",
        )
        .unwrap_err();
        assert_eq!(err, DrtError::Anaphora { variable: "u".into() });
    }

    #[test]
    fn no_cataphoric_resolution() {
        // the only matching referent is introduced after the pronoun
        let err = resolve(
            "([u{masc,sg},e1],[PRO(u), Agent(e1,u)]) + \
             ([x{masc,sg},e],[boy(x), Agent(e,x)])",
        )
        .unwrap_err();
        assert_eq!(err, DrtError::Anaphora { variable: "u".into() });
    }

    #[test]
    fn plain_pronoun_rejects_same_event_participants() {
        // x and u share event e; a plain pronoun cannot corefer
        let err = resolve(
            "([x{masc,sg},u{masc,sg},e],[boy(x), see(e), Agent(e,x), Theme(e,u), PRO(u)])",
        )
        .unwrap_err();
        assert_eq!(err, DrtError::Anaphora { variable: "u".into() });
    }

    #[test]
    fn plain_pronoun_accepts_other_event_participants() {
        let out = resolved_to_string(
            "([x{masc,sg},e,u{masc,sg},e1],\
             [boy(x), walk(e), Agent(e,x), smile(e1), Agent(e1,u), PRO(u)])",
        );
        assert!(out.contains("(u = x)"));
    }

    #[test]
    fn reflexive_requires_same_event() {
        let out = resolved_to_string(
            "([x{masc,sg},u{masc,sg},e],[boy(x), see(e), Agent(e,x), Theme(e,u), REFPRO(u)])",
        );
        assert!(out.contains("(u = x)"));
    }

    #[test]
    fn reflexive_rejects_other_event_participants() {
        let err = resolve(
            "([x{masc,sg},e,u{masc,sg},e1],\
             [boy(x), walk(e), Agent(e,x), smile(e1), Agent(e1,u), REFPRO(u)])",
        )
        .unwrap_err();
        assert_eq!(err, DrtError::Anaphora { variable: "u".into() });
    }

    #[test]
    fn possessive_binds_within_its_event() {
        let out = resolved_to_string(
            "([x{masc,sg},u{masc,sg},e],[boy(x), own(e), Agent(e,x), Theme(e,u), POSPRO(u)])",
        );
        assert!(out.contains("(u = x)"));
    }

    #[test]
    fn pronouns_do_not_antecede_pronouns() {
        // y is itself a pronoun; only x remains, resolution is unambiguous
        let out = resolved_to_string(
            "([x{masc,sg},e,y{masc,sg},e1,u{masc,sg},e2],\
             [boy(x), walk(e), Agent(e,x), PRO(y), smile(e1), Agent(e1,y), \
              laugh(e2), Agent(e2,u), PRO(u)])",
        );
        assert!(out.contains("(u = x)"));
    }

    #[test]
    fn ambiguity_returns_ranked_set() {
        // x and y both match; y is closer and role-matching, so it outranks x
        let out = resolve(
            "([x{masc,sg},e,y{masc,sg},e1,u{masc,sg},e2],\
             [boy(x), walk(e), Agent(e,x), man(y), run(e1), Agent(e1,y), \
              smile(e2), Agent(e2,u), PRO(u)])",
        )
        .expect("ambiguous resolution still succeeds");
        let rendered = out.to_string();
        assert!(rendered.contains("(u = [x(1),y(2)])"), "got: {rendered}");
    }

    #[test]
    fn proximity_ranking_is_monotonic_in_position() {
        // three equally matching Agent candidates at increasing positions
        let out = resolve(
            "([x{masc,sg},e,y{masc,sg},e1,z{masc,sg},e2,u{masc,sg},e3],\
             [boy(x), walk(e), Agent(e,x), man(y), run(e1), Agent(e1,y), \
              king(z), jump(e2), Agent(e2,z), smile(e3), Agent(e3,u), PRO(u)])",
        )
        .expect("ambiguous resolution still succeeds");
        let rendered = out.to_string();
        assert!(rendered.contains("(u = [x(1),y(2),z(3)])"), "got: {rendered}");
    }

    #[test]
    fn role_mismatch_lowers_rank() {
        // y matches the pronoun's Agent role, x is a Theme; proximity also
        // favors y, so the gap widens
        let out = resolve(
            "([x{masc,sg},e,y{masc,sg},e1,u{masc,sg},e2],\
             [boy(x), see(e), Theme(e,x), man(y), run(e1), Agent(e1,y), \
              smile(e2), Agent(e2,u), PRO(u)])",
        )
        .expect("ambiguous resolution still succeeds");
        let rendered = out.to_string();
        assert!(rendered.contains("(u = [x(0),y(2)])"), "got: {rendered}");
    }

    #[test]
    fn pronoun_without_features_never_resolves() {
        let err = resolve(
            "([x{masc,sg},e,u,e1],[boy(x), Agent(e,x), PRO(u), Agent(e1,u)])",
        )
        .unwrap_err();
        assert_eq!(err, DrtError::Anaphora { variable: "u".into() });
    }
}
