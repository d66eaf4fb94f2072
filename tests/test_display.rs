use rpsl_parser::{object, parse_rpsl_object, parse_whois_response, RpslObject};

#[test]
fn single_line_objects_display_correctly() {
    let expected = concat!(
        "role:           ACME Company\n",
        "address:        Packet Street 6\n",
        "address:        128 Series of Tubes\n",
        "address:        Internet\n",
        "email:          rpsl-parser@github.com\n",
        "nic-hdl:        RPSL1-RIPE\n",
        "source:         RIPE\n",
        "\n"
    );

    let parsed = parse_rpsl_object(expected).unwrap();
    let built = object! {
        "role": "ACME Company";
        "address": "Packet Street 6";
        "address": "128 Series of Tubes";
        "address": "Internet";
        "email": "rpsl-parser@github.com";
        "nic-hdl": "RPSL1-RIPE";
        "source": "RIPE";
    };

    assert_eq!(parsed.to_string(), expected);
    assert_eq!(built.to_string(), expected);
}

#[test]
fn multi_line_objects_display_correctly() {
    let expected = concat!(
        "role:           ACME Company\n",
        "address:        Packet Street 6\n",
        "                128 Series of Tubes\n",
        "+\n",
        "                Internet\n",
        "remarks:\n",
        "nic-hdl:        RPSL1-RIPE\n",
        "source:         RIPE\n",
        "\n"
    );

    let parsed = parse_rpsl_object(expected).unwrap();
    let built = object! {
        "role": "ACME Company";
        "address": "Packet Street 6", "128 Series of Tubes", "", "Internet";
        "remarks": "";
        "nic-hdl": "RPSL1-RIPE";
        "source": "RIPE";
    };

    assert_eq!(parsed, built);
    assert_eq!(parsed.to_string(), expected);
}

#[test]
fn parsed_objects_display_like_source() {
    let source = concat!(
        "aut-num: AS51531\n",
        "remarks:\tnot a continuation\n",
        "remarks:                       For peering information please check:\n",
        "+ https://as51531.peeringdb.com\n",
        "+\n",
        "\tPeering Policy\n",
        "mnt-by:DECIX-MNT\n",
    );
    let parsed = parse_rpsl_object(source).unwrap();

    assert_eq!(parsed.to_string(), format!("{}\n", source));
    assert_eq!(parse_rpsl_object(&parsed.to_string()).unwrap(), parsed);
}

#[test]
fn rebuilt_objects_display_aligned() {
    let parsed = parse_rpsl_object(concat!(
        "aut-num: AS51531\n",
        "remarks:\tnot a continuation\n",
        "remarks:                       For peering information please check:\n",
        "+ https://as51531.peeringdb.com\n",
        "+\n",
        "mnt-by:DECIX-MNT\n",
    ))
    .unwrap();
    let rebuilt = RpslObject::new(parsed.attributes().to_vec());

    assert_eq!(rebuilt, parsed);
    assert_eq!(
        rebuilt.to_string(),
        concat!(
            "aut-num:        AS51531\n",
            "remarks:        \tnot a continuation\n",
            "remarks:        For peering information please check:\n",
            "                https://as51531.peeringdb.com\n",
            "+\n",
            "mnt-by:         DECIX-MNT\n",
            "\n",
        )
    );
}

#[test]
fn whois_response_displays_messages_and_objects() {
    let response = parse_whois_response(concat!(
        "%   Information related to 'AS51531'\n",
        "aut-num:   AS51531\n",
        "%ERROR:101: no entries found\n",
    ))
    .unwrap();

    assert_eq!(
        response.to_string(),
        concat!(
            "% Information related to 'AS51531'\n",
            "\n",
            "aut-num:   AS51531\n",
            "\n",
            "% ERROR:101: no entries found\n",
            "\n",
        )
    );
}
