use choc_footprint::{
    compose, generate, Config, Drill, Net, Options, Pad, PadKind, PadShape, Placement, Primitive,
};

fn options(adjust: impl FnOnce(&mut Options)) -> Options {
    let mut options = Options {
        from: Some(Net::new(1, "COL1")),
        to: Some(Net::new(2, "ROW1")),
        ..Options::default()
    };
    adjust(&mut options);
    options
}

fn composed(options: Options) -> Vec<Primitive> {
    let config = Config::resolve(options).unwrap();
    compose(&config, &Placement::origin("S1")).primitives
}

fn pads(primitives: &[Primitive]) -> Vec<&Pad> {
    primitives
        .iter()
        .filter_map(|p| match p {
            Primitive::Pad(pad) => Some(pad),
            _ => None,
        })
        .collect()
}

fn net_pads<'a>(primitives: &'a [Primitive], net: &str) -> Vec<&'a Pad> {
    pads(primitives)
        .into_iter()
        .filter(|pad| pad.net.as_ref().is_some_and(|n| n.name == net))
        .collect()
}

fn silk_lines(primitives: &[Primitive], layer: &str) -> usize {
    primitives
        .iter()
        .filter(|p| matches!(p, Primitive::Line { layer: l, .. } | Primitive::Arc { layer: l, .. } if *l == layer))
        .count()
}

#[test]
fn default_config_is_hotswap_only_on_the_back_face() {
    let primitives = composed(options(|_| {}));

    let primary = net_pads(&primitives, "COL1");
    assert_eq!(primary.len(), 1);
    assert_eq!(primary[0].shape, PadShape::Rect);
    assert_eq!(primary[0].size, [2.6, 2.6]);
    assert!(primary[0].layers.contains(&"B.Cu"));

    let secondary = net_pads(&primitives, "ROW1");
    assert_eq!(secondary.len(), 1);
    assert_eq!(secondary[0].shape, PadShape::Rect);
    assert_eq!(secondary[0].size, [2.6, 2.6]);
    assert_eq!(secondary[0].at.x, 8.275);
    assert!(secondary[0].layers.contains(&"B.Cu"));

    // Nothing on the front face.
    assert!(pads(&primitives)
        .iter()
        .all(|pad| !pad.layers.iter().any(|l| l.starts_with("F."))));
    assert_eq!(silk_lines(&primitives, "F.SilkS"), 0);
}

#[test]
fn reversible_hotswap_chamfers_exactly_one_face() {
    let primitives = composed(options(|o| o.reverse = Some(true)));

    let primary = net_pads(&primitives, "COL1");
    assert_eq!(primary.len(), 2);

    let chamfered: Vec<&&Pad> = primary
        .iter()
        .filter(|pad| matches!(pad.shape, PadShape::Custom { .. }))
        .collect();
    assert_eq!(chamfered.len(), 1);
    assert_eq!(chamfered[0].kind, PadKind::Connect);
    assert_eq!(chamfered[0].zone_connect, Some(0));
    assert!(chamfered[0].layers.contains(&"F.Cu"));

    let full: Vec<&&Pad> = primary
        .iter()
        .filter(|pad| pad.shape == PadShape::Rect)
        .collect();
    assert_eq!(full.len(), 1);
    assert!(full[0].layers.contains(&"B.Cu"));
}

#[test]
fn reversible_emits_mirrored_counterparts_per_face() {
    let primitives = composed(options(|o| {
        o.reverse = Some(true);
        o.show_corner_marks = Some(true);
    }));

    assert_eq!(
        silk_lines(&primitives, "F.SilkS"),
        silk_lines(&primitives, "B.SilkS")
    );

    let secondary = net_pads(&primitives, "ROW1");
    assert_eq!(secondary.len(), 2);
    assert_eq!(secondary[0].at.x, -secondary[1].at.x);

    // Two stabilizer pads, horizontally opposed.
    let stabs: Vec<&Pad> = pads(&primitives)
        .into_iter()
        .filter(|pad| pad.net.is_none() && pad.size == [1.6, 1.6])
        .collect();
    assert_eq!(stabs.len(), 2);
    assert_eq!(stabs[0].at.x, -stabs[1].at.x);
}

#[test]
fn coexisting_mounts_flip_solder_and_stabilizer_offsets() {
    let solder_only = composed(options(|o| {
        o.hotswap = Some(false);
        o.solder = Some(true);
    }));
    let both = composed(options(|o| o.solder = Some(true)));

    let shared_solder = |primitives: &[Primitive]| -> (f64, f64) {
        let pad = net_pads(primitives, "COL1")
            .into_iter()
            .find(|pad| pad.kind == PadKind::ThruHole)
            .expect("shared solder pad");
        (pad.at.x, pad.at.y)
    };
    assert_eq!(shared_solder(&solder_only), (0.0, -5.9));
    assert_eq!(shared_solder(&both), (0.0, 5.9));

    let side_solder = |primitives: &[Primitive]| -> (f64, f64) {
        let pad = net_pads(primitives, "ROW1")
            .into_iter()
            .find(|pad| pad.kind == PadKind::ThruHole)
            .expect("side solder pad");
        (pad.at.x, pad.at.y)
    };
    assert_eq!(side_solder(&solder_only), (5.0, -3.8));
    assert_eq!(side_solder(&both), (-5.0, 3.8));

    let stab_x = |primitives: &[Primitive]| -> f64 {
        pads(primitives)
            .into_iter()
            .find(|pad| pad.size == [1.6, 1.6])
            .expect("stabilizer pad")
            .at
            .x
    };
    assert_eq!(stab_x(&solder_only), -5.15);
    assert_eq!(stab_x(&both), 5.15);
}

#[test]
fn coexisting_mounts_do_not_overlap() {
    let primitives = composed(options(|o| {
        o.solder = Some(true);
        o.reverse = Some(true);
    }));

    let bbox = |pad: &Pad| -> [f64; 4] {
        [
            pad.at.x - pad.size[0] / 2.0,
            pad.at.x + pad.size[0] / 2.0,
            pad.at.y - pad.size[1] / 2.0,
            pad.at.y + pad.size[1] / 2.0,
        ]
    };
    let disjoint = |a: [f64; 4], b: [f64; 4]| a[1] <= b[0] || b[1] <= a[0] || a[3] <= b[2] || b[3] <= a[2];

    let all = pads(&primitives);
    let solder: Vec<&&Pad> = all
        .iter()
        .filter(|pad| pad.drill == Some(Drill::Round(1.27)))
        .collect();
    let hotswap: Vec<&&Pad> = all
        .iter()
        .filter(|pad| {
            matches!(pad.kind, PadKind::Smd | PadKind::Connect)
                || (pad.kind == PadKind::NpThruHole && pad.size == [3.0, 3.0])
        })
        .collect();
    assert!(!solder.is_empty());
    assert!(!hotswap.is_empty());

    for s in &solder {
        for h in &hotswap {
            assert!(
                disjoint(bbox(s), bbox(h)),
                "solder pad at ({}, {}) overlaps hotswap pad at ({}, {})",
                s.at.x,
                s.at.y,
                h.at.x,
                h.at.y
            );
        }
    }
}

#[test]
fn choc_v1_support_adds_two_lateral_holes() {
    let without = composed(options(|_| {}));
    let with = composed(options(|o| o.choc_v1_support = Some(true)));

    let lateral = |primitives: &[Primitive]| -> Vec<(f64, f64)> {
        pads(primitives)
            .into_iter()
            .filter(|pad| pad.size == [1.9, 1.9])
            .map(|pad| (pad.at.x, pad.at.y))
            .collect()
    };
    assert!(lateral(&without).is_empty());
    assert_eq!(lateral(&with), vec![(5.5, 0.0), (-5.5, 0.0)]);

    // Independent of the other options.
    let busy = composed(options(|o| {
        o.choc_v1_support = Some(true);
        o.reverse = Some(true);
        o.solder = Some(true);
        o.show_keycaps = Some(true);
    }));
    assert_eq!(lateral(&busy).len(), 2);
}

#[test]
fn keycap_outline_is_drawn_once_and_sized_by_extents() {
    let primitives = composed(options(|o| {
        o.show_keycaps = Some(true);
        o.keycaps_x = Some(27.0);
        o.reverse = Some(true);
    }));

    let outline: Vec<([f64; 2], [f64; 2])> = primitives
        .iter()
        .filter_map(|p| match p {
            Primitive::Line {
                start,
                end,
                layer: "Dwgs.User",
                ..
            } => Some((*start, *end)),
            _ => None,
        })
        .collect();
    assert_eq!(outline.len(), 4);
    assert_eq!(outline[0].0, [-13.5, -9.0]);
    assert_eq!(outline[1].1, [13.5, 9.0]);
}

#[test]
fn neither_mount_still_composes_a_valid_description() {
    let opts = options(|o| {
        o.hotswap = Some(false);
        o.solder = Some(false);
    });
    let primitives = composed(opts.clone());
    assert!(pads(&primitives).iter().all(|pad| pad.net.is_none()));

    let text = generate(opts, &Placement::origin("S1")).unwrap();
    assert!(text.starts_with("(module PG1350"));
    assert!(text.ends_with(')'));
}

#[test]
fn composition_order_is_fixed() {
    let primitives = composed(options(|o| {
        o.choc_v1_support = Some(true);
        o.show_corner_marks = Some(true);
        o.show_keycaps = Some(true);
        o.solder = Some(true);
    }));

    assert!(matches!(primitives[0], Primitive::Reference { .. }));
    // The closing entries are the solder pads.
    let last = pads(&primitives).last().copied().cloned().unwrap();
    assert_eq!(last.kind, PadKind::ThruHole);
    assert_eq!(last.net.as_ref().map(|n| n.name.as_str()), Some("ROW1"));
}

#[test]
fn identical_inputs_render_byte_identical_output() {
    let placement = Placement {
        x: 119.05,
        y: -57.15,
        rotation: 15.0,
        reference: "S42".to_string(),
        reference_hidden: true,
    };
    let opts = options(|o| {
        o.reverse = Some(true);
        o.solder = Some(true);
        o.oval_stabilizer_pad = Some(true);
    });
    let first = generate(opts.clone(), &placement).unwrap();
    let second = generate(opts, &placement).unwrap();
    assert_eq!(first, second);
}

#[test]
fn default_render_matches_upstream_forms() {
    let text = generate(options(|_| {}), &Placement::origin("S1")).unwrap();

    assert!(text.contains(
        "(fp_text reference \"S1\" (at 0 0) (layer B.SilkS) (effects (font (size 1.27 1.27) (thickness 0.15))))"
    ));
    assert!(text.contains("(pad \"\" np_thru_hole circle (at 0 0) (size 5 5) (drill 5) (layers *.Cu))"));
    assert!(text.contains("(pad \"\" np_thru_hole circle (at 0 -5.95) (size 3 3) (drill 3) (layers *.Cu *.Mask))"));
    assert!(text.contains(
        "(pad 1 smd rect (at -3.275 -5.95 0) (size 2.6 2.6) (layers B.Cu B.Paste B.Mask) (net 1 \"COL1\"))"
    ));
    assert!(text.contains(
        "(pad 2 smd rect (at 8.275 -3.75 0) (size 2.6 2.6) (layers B.Cu B.Paste B.Mask) (net 2 \"ROW1\"))"
    ));
    assert!(text.contains("(pad \"\" np_thru_hole circle (at 5 -3.75 195) (size 3 3) (drill 3) (layers *.Cu *.Mask))"));
}

#[test]
fn net_names_stay_intact_inside_quotes() {
    let opts = options(|o| {
        o.from = Some(Net::new(1, "COL (left) 1"));
        o.to = Some(Net::new(2, "ROW1"));
    });
    let text = generate(opts, &Placement::origin("S1")).unwrap();

    assert!(text.contains("(net 1 \"COL (left) 1\")"));
    assert!(text.contains("(net 2 \"ROW1\")"));
}
