mod event_subject;
