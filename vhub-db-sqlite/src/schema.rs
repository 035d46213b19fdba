///////////////////////////////////////////////////////////////////////
// Addresses
///////////////////////////////////////////////////////////////////////

table! {
    addresses (id) {
        id -> BigInt,
        street -> Nullable<Text>,
        zip -> Nullable<Text>,
        city -> Text,
        country -> Text,
        state -> Nullable<Text>,
        created_at -> BigInt,
        updated_at -> BigInt,
    }
}

///////////////////////////////////////////////////////////////////////
// Users & Roles
///////////////////////////////////////////////////////////////////////

table! {
    roles (id) {
        id -> BigInt,
        name -> Text,
    }
}

table! {
    users (id) {
        id -> BigInt,
        email -> Text,
        email_confirmed -> Bool,
        password -> Text,
        photo_id -> Nullable<BigInt>,
        created_at -> BigInt,
        updated_at -> BigInt,
    }
}

table! {
    users_roles (user_id, role_id) {
        user_id -> BigInt,
        role_id -> BigInt,
    }
}

joinable!(users_roles -> users (user_id));
joinable!(users_roles -> roles (role_id));

///////////////////////////////////////////////////////////////////////
// Organizations & Subsidiaries
///////////////////////////////////////////////////////////////////////

table! {
    main_organizations (id) {
        id -> BigInt,
        name -> Text,
        description -> Nullable<Text>,
        created_at -> BigInt,
        updated_at -> BigInt,
    }
}

table! {
    subsidiaries (id) {
        id -> BigInt,
        name -> Text,
        main_organization_id -> Nullable<BigInt>,
        address_id -> Nullable<BigInt>,
        photo_set_id -> Nullable<BigInt>,
        news_set_id -> Nullable<BigInt>,
        comment_set_id -> Nullable<BigInt>,
        created_at -> BigInt,
        updated_at -> BigInt,
    }
}

joinable!(subsidiaries -> main_organizations (main_organization_id));
joinable!(subsidiaries -> addresses (address_id));

table! {
    subsidiaries_users (subsidiary_id, user_id) {
        subsidiary_id -> BigInt,
        user_id -> BigInt,
    }
}

joinable!(subsidiaries_users -> subsidiaries (subsidiary_id));
joinable!(subsidiaries_users -> users (user_id));

table! {
    missions (id) {
        id -> BigInt,
        name -> Text,
        description -> Nullable<Text>,
        created_at -> BigInt,
        updated_at -> BigInt,
    }
}

table! {
    subsidiaries_missions (subsidiary_id, mission_id) {
        subsidiary_id -> BigInt,
        mission_id -> BigInt,
    }
}

joinable!(subsidiaries_missions -> subsidiaries (subsidiary_id));
joinable!(subsidiaries_missions -> missions (mission_id));

///////////////////////////////////////////////////////////////////////
// Events
///////////////////////////////////////////////////////////////////////

table! {
    event_types (id) {
        id -> BigInt,
        name -> Text,
        created_at -> BigInt,
        updated_at -> BigInt,
    }
}

table! {
    events (id) {
        id -> BigInt,
        title -> Text,
        description -> Nullable<Text>,
        starts_at -> BigInt,
        ends_at -> Nullable<BigInt>,
        address_id -> Nullable<BigInt>,
        subsidiary_id -> BigInt,
        event_type_id -> Nullable<BigInt>,
        created_by -> Nullable<BigInt>,
        photo_set_id -> Nullable<BigInt>,
        news_set_id -> Nullable<BigInt>,
        comment_set_id -> Nullable<BigInt>,
        created_at -> BigInt,
        updated_at -> BigInt,
    }
}

joinable!(events -> subsidiaries (subsidiary_id));
joinable!(events -> addresses (address_id));
joinable!(events -> event_types (event_type_id));
joinable!(events -> users (created_by));

table! {
    events_users (event_id, user_id) {
        event_id -> BigInt,
        user_id -> BigInt,
        registered_at -> BigInt,
        registration_number -> BigInt,
    }
}

joinable!(events_users -> events (event_id));
joinable!(events_users -> users (user_id));

///////////////////////////////////////////////////////////////////////
// Sets and their members
///////////////////////////////////////////////////////////////////////

table! {
    photo_sets (id) {
        id -> BigInt,
        created_at -> BigInt,
    }
}

table! {
    news_sets (id) {
        id -> BigInt,
        created_at -> BigInt,
    }
}

table! {
    comment_sets (id) {
        id -> BigInt,
        created_at -> BigInt,
    }
}

table! {
    photos (id) {
        id -> BigInt,
        url -> Text,
        caption -> Nullable<Text>,
        photo_set_id -> Nullable<BigInt>,
        created_at -> BigInt,
    }
}

joinable!(photos -> photo_sets (photo_set_id));

table! {
    news (id) {
        id -> BigInt,
        title -> Text,
        body -> Text,
        created_by -> Nullable<BigInt>,
        news_set_id -> Nullable<BigInt>,
        photo_set_id -> Nullable<BigInt>,
        comment_set_id -> Nullable<BigInt>,
        created_at -> BigInt,
        updated_at -> BigInt,
    }
}

joinable!(news -> news_sets (news_set_id));
joinable!(news -> users (created_by));

table! {
    comments (id) {
        id -> BigInt,
        comment_set_id -> BigInt,
        created_by -> Nullable<BigInt>,
        created_at -> BigInt,
        text -> Text,
    }
}

joinable!(comments -> comment_sets (comment_set_id));
joinable!(comments -> users (created_by));

///////////////////////////////////////////////////////////////////////
// Sequences
///////////////////////////////////////////////////////////////////////

table! {
    request_sequences (code) {
        code -> Text,
        value -> BigInt,
    }
}

///////////////////////////////////////////////////////////////////////

allow_tables_to_appear_in_same_query!(
    addresses,
    roles,
    users,
    users_roles,
    main_organizations,
    subsidiaries,
    subsidiaries_users,
    missions,
    subsidiaries_missions,
    event_types,
    events,
    events_users,
    photo_sets,
    news_sets,
    comment_sets,
    photos,
    news,
    comments,
    request_sequences,
);
