//! Canonical bills returned by the mock store

use crate::core::bill::{Bill, BillStatus};

/// The four fixture bills, in backend (unsorted) order
pub fn bills() -> Vec<Bill> {
    vec![
        Bill {
            id: "47qAXb6fIm2zOKkLzMro".to_string(),
            status: BillStatus::Pending,
            bill_type: "Hôtel et logement".to_string(),
            date: "2004-04-04".to_string(),
            amount: 400.0,
            vat: Some(80.0),
            pct: Some(20.0),
            commentary: "séminaire billed".to_string(),
            email: "a@a".to_string(),
            file_url: "https://test.storage.tld/v0/b/billable-677b6.a…f-1.jpg?alt=media&token=c1640e12-a24b-4b11-ae52-529112e9602a".to_string(),
            file_name: "preview-facture-free-201801-pdf-1.jpg".to_string(),
            name: "encore".to_string(),
            comment_admin: Some("ok".to_string()),
        },
        Bill {
            id: "BeKy5Mo4jkmdfPGYpTxZ".to_string(),
            status: BillStatus::Refused,
            bill_type: "Transports".to_string(),
            date: "2001-01-01".to_string(),
            amount: 100.0,
            vat: None,
            pct: Some(20.0),
            commentary: "plop".to_string(),
            email: "a@a".to_string(),
            file_url: "https://test.storage.tld/v0/b/billable-677b6.a…61.jpeg?alt=media&token=7685cd61-c112-42bc-9929-8a799bb82d8b".to_string(),
            file_name: "1592770761.jpeg".to_string(),
            name: "test1".to_string(),
            comment_admin: Some("en fait non".to_string()),
        },
        Bill {
            id: "UIUZtnPQvnbFnB0ozvJh".to_string(),
            status: BillStatus::Accepted,
            bill_type: "Services en ligne".to_string(),
            date: "2003-03-03".to_string(),
            amount: 300.0,
            vat: Some(60.0),
            pct: Some(20.0),
            commentary: String::new(),
            email: "a@a".to_string(),
            file_url: "https://test.storage.tld/v0/b/billable-677b6.a…dur.png?alt=media&token=571d34cb-9c8f-430a-af52-66221cae1da3".to_string(),
            file_name: "facture-client-php-exportee-dans-document-pdf-enregistre-sur-disque-dur.png".to_string(),
            name: "test3".to_string(),
            comment_admin: Some("bon bah d'accord".to_string()),
        },
        Bill {
            id: "qcCK3SzECmaZAGRrHjaC".to_string(),
            status: BillStatus::Refused,
            bill_type: "Restaurants et bars".to_string(),
            date: "2002-02-02".to_string(),
            amount: 200.0,
            vat: Some(40.0),
            pct: Some(20.0),
            commentary: "test2".to_string(),
            email: "a@a".to_string(),
            file_url: "https://test.storage.tld/v0/b/billable-677b6.a…f-1.jpg?alt=media&token=4df6ed2c-12c8-42a2-b013-346c1346f732".to_string(),
            file_name: "preview-facture-free-201801-pdf-1.jpg".to_string(),
            name: "test2".to_string(),
            comment_admin: Some("pas la bonne facture".to_string()),
        },
    ]
}

/// A single bill whose date and type are corrupted
pub fn corrupted_bill() -> Bill {
    Bill {
        id: "47qAXb6fIm2zOKkLzMro".to_string(),
        status: BillStatus::Pending,
        bill_type: "ERROR".to_string(),
        date: "20000004-04-04".to_string(),
        amount: 400.0,
        vat: Some(80.0),
        pct: Some(20.0),
        commentary: "séminaire billed".to_string(),
        email: "a@a".to_string(),
        file_url: "https://test.storage.tld/v0/b/billable-677b6.a…f-1.jpg?alt=media&token=c1640e12-a24b-4b11-ae52-529112e9602a".to_string(),
        file_name: "preview-facture-free-201801-pdf-1.jpg".to_string(),
        name: "encore".to_string(),
        comment_admin: Some("ok".to_string()),
    }
}
