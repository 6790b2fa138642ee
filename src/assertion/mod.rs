//! Assertion engine: generic, subject, status, and negation attributes for mentions.

pub mod generic;
pub mod status;
pub mod subject;

use tracing::{debug, instrument};

use crate::{
    config::Settings,
    document::{Document, MentionId, Polarity, Status, Subject},
    error::Result,
    fsm::IndicatorStrategy,
};

pub use generic::{GenericFeature, GenericFeatures};
pub use status::ScopeWindow;
pub use subject::{SubjectFeature, SubjectFeatures};

/// Immutable classifier configuration; share across tasks with `Arc`.
#[derive(Debug, Clone)]
pub struct AssertionEngine {
    subsumption_window: usize,
    scopes: ScopeWindow,
    status: IndicatorStrategy,
    negation: IndicatorStrategy,
}

impl AssertionEngine {
    /// Resolve the configured strategies; unknown names are rejected here.
    pub fn new(settings: &Settings) -> Result<Self> {
        let status = IndicatorStrategy::named(&settings.status_strategy)?;
        let negation = IndicatorStrategy::named(&settings.negation_strategy)?;
        debug!(
            status = %status.kind(),
            negation = %negation.kind(),
            window = settings.subsumption_window,
            "assertion engine ready"
        );
        Ok(Self {
            subsumption_window: settings.subsumption_window,
            scopes: ScopeWindow {
                left: settings.left_scope,
                right: settings.right_scope,
                order: settings.scope_order.clone(),
            },
            status,
            negation,
        })
    }

    pub fn extract_generic_features(&self, doc: &Document, id: MentionId) -> Result<GenericFeatures> {
        generic::extract_features(doc, id, self.subsumption_window)
    }

    pub fn classify_generic(&self, doc: &Document, id: MentionId) -> Result<bool> {
        Ok(generic::classify(&self.extract_generic_features(doc, id)?))
    }

    pub fn extract_subject_features(&self, doc: &Document, id: MentionId) -> Result<SubjectFeatures> {
        subject::extract_features(doc, id)
    }

    pub fn classify_subject(&self, doc: &Document, id: MentionId) -> Result<Subject> {
        Ok(subject::classify(&self.extract_subject_features(doc, id)?))
    }

    pub fn classify_status(&self, doc: &Document, id: MentionId) -> Result<Option<Status>> {
        status::detect_status(doc, id, &self.status, &self.scopes)
    }

    pub fn classify_polarity(&self, doc: &Document, id: MentionId) -> Result<Polarity> {
        status::detect_polarity(doc, id, &self.negation, &self.scopes)
    }

    /// Classify every mention and write the labels onto its attribute slots.
    ///
    /// All labels are computed before any slot is written, so a failure leaves the
    /// document untouched.
    #[instrument(skip_all, fields(mentions = doc.mention_ids().count()))]
    pub fn annotate(&self, doc: &mut Document) -> Result<()> {
        let mut labels = Vec::new();
        for id in doc.mention_ids() {
            labels.push((
                id,
                self.classify_generic(doc, id)?,
                self.classify_subject(doc, id)?,
                self.classify_status(doc, id)?,
                self.classify_polarity(doc, id)?,
            ));
        }

        for (id, generic, subject, status, polarity) in labels {
            let attributes = &mut doc.mention_mut(id)?.attributes;
            attributes.generic = Some(generic);
            attributes.subject = Some(subject);
            attributes.polarity = Some(polarity);
            attributes.history_of = Some(matches!(
                status,
                Some(Status::HistoryOf | Status::FamilyHistoryOf)
            ));
            attributes.uncertainty = Some(status == Some(Status::Probable));
            attributes.status = status;
        }
        Ok(())
    }
}
