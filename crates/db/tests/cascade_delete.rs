//! Cascade behaviour: deleting a student removes exactly the lessons and
//! invoices that reference it, and no others.

use chrono::NaiveDate;
use sqlx::PgPool;
use tutoria_db::models::invoice::CreateInvoice;
use tutoria_db::models::lesson::CreateLesson;
use tutoria_db::models::student::CreateStudent;
use tutoria_db::repositories::{InvoiceRepo, LessonRepo, StudentRepo};

fn new_student(name: &str) -> CreateStudent {
    CreateStudent {
        name: name.to_string(),
        guardians: "Mãe: Regina".to_string(),
        phone: None,
        address: None,
        plan_name: "Quinzenal".to_string(),
        lessons_total: None,
        lessons_done: None,
        pix_key: None,
        active: None,
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

async fn seed_lesson(pool: &PgPool, student_id: i64, day: u32) -> i64 {
    LessonRepo::create(
        pool,
        &CreateLesson {
            student_id,
            date: date(2026, 3, day),
            time: None,
            title: "Aula".to_string(),
            info: None,
            status: None,
        },
    )
    .await
    .unwrap()
    .id
}

async fn seed_invoice(pool: &PgPool, student_id: i64, month: u32) -> i64 {
    InvoiceRepo::create(
        pool,
        &CreateInvoice {
            student_id,
            month: date(2026, month, 1),
            due_date: None,
            amount: "300.00".parse().unwrap(),
            status: None,
            notes: None,
        },
    )
    .await
    .unwrap()
    .id
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn deleting_a_student_cascades_to_owned_rows_only(pool: PgPool) {
    let doomed = StudentRepo::create(&pool, &new_student("João")).await.unwrap();
    let survivor = StudentRepo::create(&pool, &new_student("Marina")).await.unwrap();

    let doomed_lesson = seed_lesson(&pool, doomed.id, 2).await;
    let doomed_invoice = seed_invoice(&pool, doomed.id, 3).await;
    let kept_lesson = seed_lesson(&pool, survivor.id, 2).await;
    let kept_invoice = seed_invoice(&pool, survivor.id, 3).await;

    assert!(StudentRepo::delete(&pool, doomed.id).await.unwrap());

    // The deleted student's rows are gone.
    assert!(StudentRepo::find_by_id(&pool, doomed.id).await.unwrap().is_none());
    assert!(LessonRepo::find_by_id(&pool, doomed_lesson).await.unwrap().is_none());
    assert!(InvoiceRepo::find_by_id(&pool, doomed_invoice).await.unwrap().is_none());

    // The other student's rows are untouched.
    assert!(StudentRepo::find_by_id(&pool, survivor.id).await.unwrap().is_some());
    assert!(LessonRepo::find_by_id(&pool, kept_lesson).await.unwrap().is_some());
    assert!(InvoiceRepo::find_by_id(&pool, kept_invoice).await.unwrap().is_some());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn cascade_removes_every_owned_row(pool: PgPool) {
    let student = StudentRepo::create(&pool, &new_student("Otávio")).await.unwrap();
    for day in 1..=5 {
        seed_lesson(&pool, student.id, day).await;
    }
    for month in 1..=4 {
        seed_invoice(&pool, student.id, month).await;
    }

    StudentRepo::delete(&pool, student.id).await.unwrap();

    assert!(LessonRepo::list(&pool, None, None).await.unwrap().is_empty());
    assert!(InvoiceRepo::list(&pool, None).await.unwrap().is_empty());
}
